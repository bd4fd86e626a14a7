//! Byte-range safe text rewriter.
//!
//! Rules describe their changes as byte-offset edits against the text they
//! scanned; this rewriter validates and applies them in one go so earlier
//! edits never shift the offsets of later ones.
//!
//! # Usage
//!
//! ```
//! use tweenfix::fix::{ByteRangeRewriter, Edit};
//!
//! let source = "transition={{ duration: 1 }}";
//! let mut rewriter = ByteRangeRewriter::new(source);
//! rewriter.add_edit(Edit::insert(25, ", type: \"tween\""));
//! let fixed = rewriter.apply().expect("should apply");
//! assert_eq!(fixed, "transition={{ duration: 1, type: \"tween\" }}");
//! ```

use thiserror::Error;

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Create an insertion edit (insert before position)
    #[must_use]
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self::new(position, position, content)
    }

    /// Check if this edit overlaps with another.
    ///
    /// Two insertions at the same offset count as overlapping: their relative
    /// order would be ambiguous.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        if self.start_byte == self.end_byte && other.start_byte == other.end_byte {
            return self.start_byte == other.start_byte;
        }
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Two or more edits have overlapping ranges
    #[error("Overlapping edits at indices {edit_a} and {edit_b}")]
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range is out of bounds
    #[error("Edit {edit_index} out of bounds: end_byte {end_byte} > source length {source_len}")]
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
    /// Edit boundary falls inside a multi-byte character
    #[error("Edit {edit_index} does not start or end on a character boundary")]
    NotCharBoundary {
        /// Index of the bad edit
        edit_index: usize,
    },
}

/// Safe text rewriter using byte ranges
///
/// This rewriter applies edits in reverse order to preserve byte positions,
/// and validates that edits don't overlap.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    source: String,
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Check if there are any pending edits
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds, or split a character
    pub fn validate(&self) -> Result<(), RewriteError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.end_byte > self.source.len() || edit.start_byte > edit.end_byte {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
            if !self.source.is_char_boundary(edit.start_byte)
                || !self.source.is_char_boundary(edit.end_byte)
            {
                return Err(RewriteError::NotCharBoundary { edit_index: i });
            }
        }

        for i in 0..self.edits.len() {
            for j in (i + 1)..self.edits.len() {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(RewriteError::OverlappingEdits {
                        edit_a: i,
                        edit_b: j,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// # Errors
    /// Returns error if edits overlap or are out of bounds
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted_edits = self.edits;

        // Apply from end to start so earlier offsets stay valid
        sorted_edits.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

        for edit in sorted_edits {
            result.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_insertions_keep_offsets() {
        let source = "a={{ x }} b={{ y }}";
        let mut rewriter = ByteRangeRewriter::new(source);
        rewriter.add_edit(Edit::insert(6, ", 1"));
        rewriter.add_edit(Edit::insert(16, ", 2"));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result, "a={{ x, 1 }} b={{ y, 2 }}");
    }

    #[test]
    fn test_same_position_insertions_rejected() {
        let mut rewriter = ByteRangeRewriter::new("hello");
        rewriter.add_edit(Edit::insert(2, "a"));
        rewriter.add_edit(Edit::insert(2, "b"));

        let result = rewriter.apply();
        assert!(matches!(result, Err(RewriteError::OverlappingEdits { .. })));
    }

    #[test]
    fn test_overlapping_edits_error() {
        let mut rewriter = ByteRangeRewriter::new("hello world");
        rewriter.add_edit(Edit::new(0, 8, "hi"));
        rewriter.add_edit(Edit::new(5, 10, "there"));

        let result = rewriter.apply();
        assert!(matches!(result, Err(RewriteError::OverlappingEdits { .. })));
    }

    #[test]
    fn test_out_of_bounds_error() {
        let mut rewriter = ByteRangeRewriter::new("short");
        rewriter.add_edit(Edit::new(0, 100, "long"));

        let result = rewriter.apply();
        assert!(matches!(result, Err(RewriteError::OutOfBounds { .. })));
    }

    #[test]
    fn test_char_boundary_error() {
        let mut rewriter = ByteRangeRewriter::new("é");
        rewriter.add_edit(Edit::insert(1, "x"));

        let result = rewriter.apply();
        assert!(matches!(
            result,
            Err(RewriteError::NotCharBoundary { edit_index: 0 })
        ));
    }

    #[test]
    fn test_no_edits_is_identity() {
        let rewriter = ByteRangeRewriter::new("unchanged");
        assert!(!rewriter.has_edits());
        assert_eq!(rewriter.apply().expect("should apply"), "unchanged");
    }
}
