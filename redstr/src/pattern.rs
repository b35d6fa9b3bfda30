//! Named matchers.
//!
//! Every pattern compiles to a single [`Regex`] at construction time, so
//! matching is linear in the input regardless of what the rule author wrote.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::{error::ConfigurationError, sensitivity::Sensitivity};

/// Upper bound on the compiled size of a single pattern, in bytes.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Capture group that narrows a regex match to the part being redacted.
pub const SECRET_GROUP: &str = "secret";

/// The form a pattern was written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSource {
    /// A regular expression.
    Regex(String),
    /// A single fixed string.
    Literal(String),
    /// A set of fixed strings; the longest wins where several start together.
    Literals(Vec<String>),
}

/// A named, compiled matcher tagged with a [`Sensitivity`].
#[derive(Clone)]
pub struct Pattern {
    name: String,
    sensitivity: Sensitivity,
    source: PatternSource,
    regex: Regex,
    secret_group: Option<usize>,
}

impl Pattern {
    /// Compiles a regular expression.
    ///
    /// If the expression has a group named `secret`, only that group's span
    /// is redacted and the rest of the match is kept.
    ///
    /// Alternation inside one expression is leftmost-first, as in the `regex`
    /// crate: `ab|abc` matches `ab` in `"abc"`. Longest-match only decides
    /// between rules and within [`Pattern::literals`] sets.
    pub fn regex(
        name: impl Into<String>,
        sensitivity: Sensitivity,
        pattern: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let pattern = pattern.into();
        let regex = compile(&name, &pattern)?;
        let secret_group = regex
            .capture_names()
            .position(|group| group == Some(SECRET_GROUP));
        Ok(Self {
            name,
            sensitivity,
            source: PatternSource::Regex(pattern),
            regex,
            secret_group,
        })
    }

    /// Matches a fixed string exactly.
    pub fn literal(
        name: impl Into<String>,
        sensitivity: Sensitivity,
        literal: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let literal = literal.into();
        let regex = compile(&name, &regex::escape(&literal))?;
        Ok(Self {
            name,
            sensitivity,
            source: PatternSource::Literal(literal),
            regex,
            secret_group: None,
        })
    }

    /// Matches any of several fixed strings.
    ///
    /// Alternatives are tried longest first, so `["ab", "abc"]` matches all of
    /// `"abc"` rather than stopping at `"ab"`.
    pub fn literals<I, S>(
        name: impl Into<String>,
        sensitivity: Sensitivity,
        literals: I,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        if literals.is_empty() || literals.iter().any(String::is_empty) {
            return Err(ConfigurationError::EmptyPattern { rule: name });
        }

        let mut ordered: Vec<&str> = literals.iter().map(String::as_str).collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        ordered.dedup();
        let alternation = ordered
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");

        let regex = compile(&name, &alternation)?;
        Ok(Self {
            name,
            sensitivity,
            source: PatternSource::Literals(literals),
            regex,
            secret_group: None,
        })
    }

    /// The pattern (and rule) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sensitivity tag.
    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// The pattern as written.
    pub const fn source(&self) -> &PatternSource {
        &self.source
    }

    /// Returns `true` if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte ranges to redact in `text`, left to right and non-overlapping.
    ///
    /// Zero-width matches are skipped. With a `secret` group, the range is
    /// the group's span; matches where the group did not participate are
    /// skipped.
    pub fn spans<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        let spans: Box<dyn Iterator<Item = (usize, usize)> + 't> = match self.secret_group {
            Some(group) => Box::new(
                self.regex
                    .captures_iter(text)
                    .filter_map(move |caps| caps.get(group))
                    .map(|m| (m.start(), m.end())),
            ),
            None => Box::new(self.regex.find_iter(text).map(|m| (m.start(), m.end()))),
        };
        spans.filter(|(start, end)| start < end)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("sensitivity", &self.sensitivity)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ConfigurationError> {
    if pattern.is_empty() {
        return Err(ConfigurationError::EmptyPattern {
            rule: name.to_string(),
        });
    }
    let regex = RegexBuilder::new(pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| ConfigurationError::InvalidPattern {
            rule: name.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;
    if regex.is_match("") {
        return Err(ConfigurationError::MatchesEmpty {
            rule: name.to_string(),
            pattern: pattern.to_string(),
        });
    }
    Ok(regex)
}
