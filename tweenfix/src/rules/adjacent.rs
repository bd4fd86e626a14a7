//! Injection for a flagged `animate` block followed directly by its transition.
//!
//! Covers declarations outside any `<motion.*>` tag, such as props spread
//! from a helper or JSX the block pattern cannot delimit.

use super::ids::RULE_ID_ADJACENT_PAIR;
use super::{tween_edit_at, KeyframeScan, Rule, RuleMetadata};
use crate::fix::{ByteRangeRewriter, RewriteError};

/// Types a `transition={{ ... }}` separated from a flagged `animate` block
/// only by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentPairRule;

impl Rule for AdjacentPairRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: RULE_ID_ADJACENT_PAIR,
            name: "adjacent-pair",
            description: "Add type: \"tween\" to a transition that directly follows a multi-keyframe animate",
        }
    }

    fn apply(&self, source: &str, scan: &KeyframeScan) -> Result<Option<String>, RewriteError> {
        let mut rewriter = ByteRangeRewriter::new(source);
        for animate in scan.flagged() {
            let rest = &source[animate.end..];
            let gap = rest.len() - rest.trim_start().len();
            if let Some(edit) = tween_edit_at(source, animate.end + gap, source.len()) {
                rewriter.add_edit(edit);
            }
        }

        if !rewriter.has_edits() {
            return Ok(None);
        }
        rewriter.apply().map(Some)
    }
}
