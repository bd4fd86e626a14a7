//! Shared fix module for in-place text edits.
//!
//! The core component is `ByteRangeRewriter`, which applies
//! edits using byte offsets to safely modify source text.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
