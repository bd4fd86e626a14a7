//! Literal fallback: exact declaration texts and their corrected forms.
//!
//! Matching is plain substring replacement. A declaration whose numbers or
//! spacing differ from a table entry is not touched by this rule.

use super::ids::RULE_ID_LITERAL_TABLE;
use super::{KeyframeScan, Rule, RuleMetadata};
use crate::fix::RewriteError;

/// Known untyped transition declarations and their typed replacements.
pub const KNOWN_TRANSITIONS: &[(&str, &str)] = &[
    (
        "transition={{ duration: 2, repeat: Infinity, repeatDelay: 1 }}",
        "transition={{ duration: 2, repeat: Infinity, repeatDelay: 1, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 1.5, repeat: Infinity, repeatDelay: 2 }}",
        "transition={{ duration: 1.5, repeat: Infinity, repeatDelay: 2, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 2, repeat: Infinity, repeatDelay: 3 }}",
        "transition={{ duration: 2, repeat: Infinity, repeatDelay: 3, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 12, repeat: Infinity, ease: \"easeInOut\", delay: 4 }}",
        "transition={{ duration: 12, repeat: Infinity, ease: \"easeInOut\", delay: 4, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 3, repeat: Infinity, repeatDelay: 2 }}",
        "transition={{ duration: 3, repeat: Infinity, repeatDelay: 2, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 2, repeat: Infinity }}",
        "transition={{ duration: 2, repeat: Infinity, type: \"tween\" }}",
    ),
    (
        "transition={{ duration: 1, repeat: Infinity }}",
        "transition={{ duration: 1, repeat: Infinity, type: \"tween\" }}",
    ),
];

/// Replaces every occurrence of a `KNOWN_TRANSITIONS` entry, in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralTableRule;

impl Rule for LiteralTableRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: RULE_ID_LITERAL_TABLE,
            name: "literal-table",
            description: "Replace known exact transition texts with their typed form",
        }
    }

    fn apply(&self, source: &str, _scan: &KeyframeScan) -> Result<Option<String>, RewriteError> {
        let mut text: Option<String> = None;
        for (old, new) in KNOWN_TRANSITIONS {
            let current = text.as_deref().unwrap_or(source);
            if current.contains(old) {
                text = Some(current.replace(old, new));
            }
        }
        Ok(text.filter(|t| t != source))
    }
}
