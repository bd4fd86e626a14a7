//! Structural pass: inject the tween directive into `<motion.*>` blocks.

use super::ids::RULE_ID_MOTION_BLOCK;
use super::{tween_edit_at, KeyframeScan, Rule, RuleMetadata};
use crate::constants::{MOTION_BLOCK_RE, TRANSITION_ATTR};
use crate::fix::{ByteRangeRewriter, RewriteError};

/// For every `<motion.*>` block holding a flagged `animate` declaration,
/// types the first `transition=` declaration of that block.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionBlockRule;

impl Rule for MotionBlockRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: RULE_ID_MOTION_BLOCK,
            name: "motion-block",
            description: "Add type: \"tween\" to the first transition of a <motion.*> block with multi-keyframe animate",
        }
    }

    fn apply(&self, source: &str, scan: &KeyframeScan) -> Result<Option<String>, RewriteError> {
        if scan.is_empty() {
            return Ok(None);
        }

        let mut rewriter = ByteRangeRewriter::new(source);
        for block in MOTION_BLOCK_RE().find_iter(source) {
            let range = block.range();
            if !scan.any_within(&range) {
                continue;
            }
            let Some(offset) = block.as_str().find(TRANSITION_ATTR) else {
                continue;
            };
            if let Some(edit) = tween_edit_at(source, range.start + offset, range.end) {
                rewriter.add_edit(edit);
            }
        }

        if !rewriter.has_edits() {
            return Ok(None);
        }
        rewriter.apply().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Option<String> {
        MotionBlockRule
            .apply(source, &KeyframeScan::new(source))
            .expect("rule should not fail")
    }

    #[test]
    fn test_multiline_motion_div() {
        let src = r#"<motion.div
  className="dot"
  animate={{ scale: [1, 1.2, 1] }}
  transition={{ duration: 2, repeat: Infinity }}
>
  <span />
</motion.div>"#;
        let fixed = run(src).expect("should fire");
        assert!(fixed.contains(r#"transition={{ duration: 2, repeat: Infinity, type: "tween" }}"#));
        assert!(fixed.contains("animate={{ scale: [1, 1.2, 1] }}"));
    }

    #[test]
    fn test_transition_before_animate_is_still_first() {
        let src = r#"<motion.span transition={{ duration: 1 }} animate={{ y: [0, -4, 0] }} />"#;
        let fixed = run(src).expect("should fire");
        assert_eq!(
            fixed,
            r#"<motion.span transition={{ duration: 1, type: "tween" }} animate={{ y: [0, -4, 0] }} />"#
        );
    }

    #[test]
    fn test_unflagged_block_untouched() {
        let src = r#"<motion.div animate={{ opacity: 1 }} transition={{ duration: 1 }}></motion.div>"#;
        assert!(run(src).is_none());
    }

    #[test]
    fn test_typed_transition_untouched() {
        let src = r#"<motion.div animate={{ x: [0, 5, 0] }} transition={{ type: "spring" }}></motion.div>"#;
        assert!(run(src).is_none());
    }

    #[test]
    fn test_each_block_fixed_independently() {
        let src = r#"<motion.div animate={{ x: [0, 5, 0] }} transition={{ duration: 1 }}></motion.div>
<motion.div animate={{ opacity: [0, 1, 0] }} transition={{ duration: 3 }}></motion.div>"#;
        let fixed = run(src).expect("should fire");
        assert_eq!(fixed.matches("type: \"tween\"").count(), 2);
    }

    #[test]
    fn test_second_application_is_noop() {
        let src = r#"<motion.div animate={{ rotate: [0, 90, 0] }} transition={{ duration: 1 }} />"#;
        let once = run(src).expect("should fire");
        assert!(run(&once).is_none());
    }
}
