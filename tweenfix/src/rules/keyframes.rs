//! General pass: flag `animate` blocks that carry multi-keyframe arrays.

use crate::constants::{ANIMATE_BLOCK_RE, KEYFRAME_ARRAY_RE};
use std::ops::Range;

/// Returns true if an `animate` body holds a 3+-entry array for a tracked property.
#[must_use]
pub fn has_multi_keyframes(body: &str) -> bool {
    KEYFRAME_ARRAY_RE().is_match(body)
}

/// Byte ranges of every flagged `animate={{ ... }}` block in one text.
///
/// The ranges are only valid for the exact text that was scanned; rescan
/// after any edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyframeScan {
    flagged: Vec<Range<usize>>,
}

impl KeyframeScan {
    /// Scans `source` for flagged animate blocks.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let flagged = ANIMATE_BLOCK_RE()
            .captures_iter(source)
            .filter(|caps| caps.get(1).is_some_and(|body| has_multi_keyframes(body.as_str())))
            .filter_map(|caps| caps.get(0).map(|m| m.range()))
            .collect();
        Self { flagged }
    }

    /// Flagged block ranges, in source order.
    #[must_use]
    pub fn flagged(&self) -> &[Range<usize>] {
        &self.flagged
    }

    /// True when nothing was flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }

    /// True if some flagged block lies entirely within `outer`.
    #[must_use]
    pub fn any_within(&self, outer: &Range<usize>) -> bool {
        self.flagged
            .iter()
            .any(|r| r.start >= outer.start && r.end <= outer.end)
    }
}
