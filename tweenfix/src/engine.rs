//! The rewrite pipeline applied to one file's text.

use crate::fix::RewriteError;
use crate::rules::{default_rules, KeyframeScan, Rule};

/// Result of running every rule over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Final text after all rules.
    pub text: String,
    /// Codes of the rules that changed the text, in application order.
    pub applied: Vec<&'static str>,
}

impl RewriteOutcome {
    /// True if any rule changed the text.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Ordered rule list run over each file's text.
///
/// The keyframe scan runs first and is refreshed whenever a rule changes the
/// text, so every rule sees offsets that match what it is editing.
pub struct Rewriter {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Rewriter {
    /// Builds a rewriter over an explicit rule list.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Runs every rule in order over `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule produces an invalid edit set.
    pub fn rewrite(&self, source: &str) -> Result<RewriteOutcome, RewriteError> {
        let mut text = source.to_owned();
        let mut scan = KeyframeScan::new(&text);
        let mut applied = Vec::new();

        for rule in &self.rules {
            if let Some(next) = rule.apply(&text, &scan)? {
                if next != text {
                    text = next;
                    scan = KeyframeScan::new(&text);
                    applied.push(rule.code());
                }
            }
        }

        Ok(RewriteOutcome { text, applied })
    }
}
