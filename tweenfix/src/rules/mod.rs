use crate::constants::{TRANSITION_ATTR, TRANSITION_RE, TWEEN_DIRECTIVE, TYPE_FIELD_RE};
use crate::fix::{Edit, RewriteError};

/// Module containing the transition-injection rule for adjacent declarations.
pub mod adjacent;
/// Module containing rule ID constants.
pub mod ids;
/// Module containing the keyframe detection pass.
pub mod keyframes;
/// Module containing the literal fallback table.
pub mod literal;
/// Module containing the `<motion.*>` block rule.
pub mod motion_block;

pub use keyframes::KeyframeScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Metadata associated with a rule.
pub struct RuleMetadata {
    /// Unique code/ID of the rule.
    pub id: &'static str,
    /// Short kebab-case name.
    pub name: &'static str,
    /// One-line description shown by `--list-rules`.
    pub description: &'static str,
}

/// A single rewrite step.
///
/// Rules are stateless: `apply` sees only the current text and the keyframe
/// scan of that same text, and must return `None` when it has nothing to
/// change. Applying a rule to its own output must also return `None`.
pub trait Rule: Send + Sync {
    /// Returns the full metadata for the rule.
    fn metadata(&self) -> RuleMetadata;
    /// Returns the unique code/ID of the rule.
    fn code(&self) -> &'static str {
        self.metadata().id
    }
    /// Rewrites `source`, or returns `None` if the rule does not fire.
    fn apply(&self, source: &str, scan: &KeyframeScan) -> Result<Option<String>, RewriteError>;
}

/// Builds the edit that adds the tween directive to the transition
/// declaration starting exactly at `at`.
///
/// Returns `None` when no declaration starts there, when it would extend past
/// `limit`, or when it already names a `type`.
pub(crate) fn tween_edit_at(source: &str, at: usize, limit: usize) -> Option<Edit> {
    if !source.get(at..)?.starts_with(TRANSITION_ATTR) {
        return None;
    }
    let caps = TRANSITION_RE().captures_at(source, at)?;
    let whole = caps.get(0)?;
    if whole.start() != at || whole.end() > limit {
        return None;
    }
    let body = caps.get(1)?;
    if TYPE_FIELD_RE().is_match(body.as_str()) {
        return None;
    }

    let trimmed = body.as_str().trim_end();
    let insertion = if trimmed.trim_start().is_empty() {
        TWEEN_DIRECTIVE.to_owned()
    } else if trimmed.ends_with(',') {
        format!(" {TWEEN_DIRECTIVE}")
    } else {
        format!(", {TWEEN_DIRECTIVE}")
    };
    let position = if trimmed.trim_start().is_empty() {
        body.start()
    } else {
        body.start() + trimmed.len()
    };
    Some(Edit::insert(position, insertion))
}

/// Returns the standard rule list in evaluation order.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(motion_block::MotionBlockRule),
        Box::new(adjacent::AdjacentPairRule),
        Box::new(literal::LiteralTableRule),
    ]
}
