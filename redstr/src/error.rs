//! Construction-time failures.
//!
//! Everything that can go wrong with a rule set is detected while building
//! patterns, rules or the engine. Once an engine exists, `redact` is total.

use std::path::PathBuf;

use thiserror::Error;

/// A rule set that cannot be turned into a working engine.
///
/// Hosts should treat this as "do not activate redaction" rather than as a
/// reason to stop entirely.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The pattern source (regex or literal) was empty.
    #[error("rule `{rule}`: pattern is empty")]
    EmptyPattern {
        /// Name of the offending rule.
        rule: String,
    },

    /// The regex failed to parse or exceeded the compiled size budget.
    #[error("rule `{rule}`: invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Name of the offending rule.
        rule: String,
        /// The pattern source as supplied.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The pattern matches the empty string and would match everywhere.
    #[error("rule `{rule}`: pattern `{pattern}` matches the empty string")]
    MatchesEmpty {
        /// Name of the offending rule.
        rule: String,
        /// The pattern source as supplied.
        pattern: String,
    },

    /// A rule names a sensitivity class that does not exist.
    #[error("rule `{rule}`: unknown sensitivity `{value}`")]
    UnknownSensitivity {
        /// Name of the offending rule.
        rule: String,
        /// The unrecognized sensitivity name.
        value: String,
    },

    /// Two rules share a name, which would merge their match counts.
    #[error("duplicate rule name `{name}`")]
    DuplicateRule {
        /// The repeated name.
        name: String,
    },

    /// A fixed placeholder would itself be redacted by a later pass.
    #[error("rule `{rule}`: placeholder `{placeholder}` is matched by rule `{matched_by}`")]
    PlaceholderRematches {
        /// Rule owning the placeholder.
        rule: String,
        /// The placeholder text.
        placeholder: String,
        /// Rule whose pattern matches the placeholder.
        matched_by: String,
    },

    /// A rule definition carries none of `regex`, `literal` or `literals`.
    #[error("rule `{rule}`: one of `regex`, `literal` or `literals` is required")]
    MissingPattern {
        /// Name of the offending rule.
        rule: String,
    },

    /// A rule definition carries more than one pattern kind.
    #[error("rule `{rule}`: only one of `regex`, `literal` or `literals` may be set")]
    AmbiguousPattern {
        /// Name of the offending rule.
        rule: String,
    },

    /// The rules file could not be read.
    #[error("failed to read rules from {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rules document is not valid JSON for the expected shape.
    #[error("invalid JSON rules document: {0}")]
    Json(#[from] serde_json::Error),

    /// The rules document is not valid TOML for the expected shape.
    #[cfg(feature = "toml")]
    #[error("invalid TOML rules document: {0}")]
    Toml(#[from] toml::de::Error),

    /// The rules file extension does not map to a supported format.
    #[error("unsupported rules file format: {}", .path.display())]
    UnsupportedFormat {
        /// Path whose extension was not recognized.
        path: PathBuf,
    },
}
