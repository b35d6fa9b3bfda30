use std::collections::BTreeMap;

use serde::Serialize;

/// Redacted text plus per-rule match counts.
///
/// Only rules that redacted at least one span appear in the counts, ordered
/// by rule name; [`RedactionResult::count`] returns zero for the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct RedactionResult {
    text: String,
    counts: BTreeMap<String, usize>,
}

impl RedactionResult {
    pub(crate) fn new(text: String, counts: BTreeMap<String, usize>) -> Self {
        Self { text, counts }
    }

    /// Wraps text that was not scanned.
    pub(crate) fn unchanged(text: &str) -> Self {
        Self::new(text.to_string(), BTreeMap::new())
    }

    /// The redacted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the result, returning only the text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Matches redacted per rule name.
    pub const fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Matches redacted by the named rule.
    pub fn count(&self, rule: &str) -> usize {
        self.counts.get(rule).copied().unwrap_or(0)
    }

    /// Matches redacted across all rules.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns `true` if anything was redacted.
    pub fn is_redacted(&self) -> bool {
        !self.counts.is_empty()
    }
}

impl AsRef<str> for RedactionResult {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<RedactionResult> for String {
    fn from(result: RedactionResult) -> Self {
        result.text
    }
}
