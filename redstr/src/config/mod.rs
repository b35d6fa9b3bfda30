//! Loading rules from embedded defaults or a rules document.
//!
//! A rules document is JSON or (with the `toml` feature) TOML:
//!
//! ```toml
//! mode = "merged"
//! include_defaults = true
//!
//! [[rules]]
//! name = "session_cookie"
//! sensitivity = "session_id"
//! regex = "JSESSIONID=(?P<secret>[0-9A-F]{32})"
//!
//! [rules.replacement]
//! kind = "keep"
//! last = 4
//! ```
//!
//! Each rule needs exactly one of `regex`, `literal` or `literals`. Without a
//! `replacement`, the sensitivity's default applies. Sensitivity names are
//! checked strictly, so a typo fails the whole document.

mod defaults;

use std::{fs, path::Path};

use serde::Deserialize;
use slog::Logger;

pub use defaults::default_rules;

use crate::{
    engine::{EngineOptions, EvaluationMode, RedactionEngine, RedactionRule},
    error::ConfigurationError,
    pattern::Pattern,
    policy::{KeepConfig, MaskConfig, Replacement},
    sensitivity::Sensitivity,
};

/// A rules document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// How overlapping matches are resolved.
    #[serde(default)]
    pub mode: EvaluationMode,
    /// Prepend the built-in rules to `rules`.
    #[serde(default)]
    pub include_defaults: bool,
    /// Rules, in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule in a rules document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Rule name, reported in match counts.
    pub name: String,
    /// Sensitivity name, e.g. `"token"` or `"ip_address"`.
    pub sensitivity: String,
    /// Regular expression source.
    #[serde(default)]
    pub regex: Option<String>,
    /// A single literal.
    #[serde(default)]
    pub literal: Option<String>,
    /// A set of literals.
    #[serde(default)]
    pub literals: Option<Vec<String>>,
    /// Replacement; the sensitivity default when absent.
    #[serde(default)]
    pub replacement: Option<ReplacementConfig>,
}

/// Replacement as written in a rules document, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplacementConfig {
    /// Fixed placeholder, `[REDACTED]` when omitted.
    Full {
        /// Placeholder text.
        #[serde(default)]
        placeholder: Option<String>,
    },
    /// Keep `first`/`last` characters visible.
    Keep {
        /// Leading characters kept.
        #[serde(default)]
        first: usize,
        /// Trailing characters kept.
        #[serde(default)]
        last: usize,
        /// Mask symbol, `*` when omitted.
        #[serde(default)]
        mask_char: Option<char>,
    },
    /// Mask `first`/`last` characters.
    Mask {
        /// Leading characters masked.
        #[serde(default)]
        first: usize,
        /// Trailing characters masked.
        #[serde(default)]
        last: usize,
        /// Mask symbol, `*` when omitted.
        #[serde(default)]
        mask_char: Option<char>,
    },
}

impl ReplacementConfig {
    /// Converts to a [`Replacement`].
    pub fn to_replacement(&self) -> Replacement {
        match self {
            Self::Full { placeholder: None } => Replacement::default_full(),
            Self::Full {
                placeholder: Some(placeholder),
            } => Replacement::full_with(placeholder.clone()),
            Self::Keep {
                first,
                last,
                mask_char,
            } => {
                let config = KeepConfig::both(*first, *last);
                Replacement::Keep(mask_char.map_or(config, |c| config.with_mask_char(c)))
            }
            Self::Mask {
                first,
                last,
                mask_char,
            } => {
                let config = MaskConfig::both(*first, *last);
                Replacement::Mask(mask_char.map_or(config, |c| config.with_mask_char(c)))
            }
        }
    }
}

impl RuleConfig {
    /// Compiles the rule.
    pub fn to_rule(&self) -> Result<RedactionRule, ConfigurationError> {
        let sensitivity: Sensitivity =
            self.sensitivity
                .parse()
                .map_err(|_| ConfigurationError::UnknownSensitivity {
                    rule: self.name.clone(),
                    value: self.sensitivity.clone(),
                })?;

        let pattern = match (&self.regex, &self.literal, &self.literals) {
            (Some(regex), None, None) => Pattern::regex(&self.name, sensitivity, regex.as_str())?,
            (None, Some(literal), None) => {
                Pattern::literal(&self.name, sensitivity, literal.as_str())?
            }
            (None, None, Some(literals)) => {
                Pattern::literals(&self.name, sensitivity, literals.iter().cloned())?
            }
            (None, None, None) => {
                return Err(ConfigurationError::MissingPattern {
                    rule: self.name.clone(),
                })
            }
            _ => {
                return Err(ConfigurationError::AmbiguousPattern {
                    rule: self.name.clone(),
                })
            }
        };

        Ok(match &self.replacement {
            Some(replacement) => RedactionRule::new(pattern, replacement.to_replacement()),
            None => RedactionRule::with_default_replacement(pattern),
        })
    }
}

impl RulesConfig {
    /// Built-in rules only.
    pub fn defaults() -> Self {
        Self {
            include_defaults: true,
            ..Self::default()
        }
    }

    /// Parses a JSON rules document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a TOML rules document.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a rules file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&read()?),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml_str(&read()?),
            _ => Err(ConfigurationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Compiles every rule, built-ins first when requested.
    pub fn to_rules(&self) -> Result<Vec<RedactionRule>, ConfigurationError> {
        let mut rules = if self.include_defaults {
            default_rules()?
        } else {
            Vec::with_capacity(self.rules.len())
        };
        for rule in &self.rules {
            rules.push(rule.to_rule()?);
        }
        Ok(rules)
    }

    /// Builds an engine that logs through `logger`.
    pub fn build(&self, logger: Logger) -> Result<RedactionEngine, ConfigurationError> {
        let options = EngineOptions::new()
            .with_mode(self.mode)
            .with_logger(logger);
        RedactionEngine::with_options(self.to_rules()?, options)
    }
}
