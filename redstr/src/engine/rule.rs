use crate::{pattern::Pattern, policy::Replacement, sensitivity::Sensitivity};

/// A pattern paired with the replacement for its matches.
#[derive(Clone, Debug)]
pub struct RedactionRule {
    pattern: Pattern,
    replacement: Replacement,
}

impl RedactionRule {
    /// Pairs `pattern` with an explicit replacement.
    pub const fn new(pattern: Pattern, replacement: Replacement) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Uses the default replacement for the pattern's sensitivity.
    pub fn with_default_replacement(pattern: Pattern) -> Self {
        let replacement = pattern.sensitivity().default_replacement();
        Self::new(pattern, replacement)
    }

    /// The rule name, shared with its pattern.
    pub fn name(&self) -> &str {
        self.pattern.name()
    }

    /// The sensitivity of the rule's pattern.
    pub const fn sensitivity(&self) -> Sensitivity {
        self.pattern.sensitivity()
    }

    /// The matcher.
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The replacement strategy.
    pub const fn replacement(&self) -> &Replacement {
        &self.replacement
    }
}
