//! The redaction engine.
//!
//! - **`rule`**: a pattern paired with its replacement (`RedactionRule`)
//! - **`scan`**: the merged and sequential evaluation strategies
//! - **`result`**: per-call output (`RedactionResult`)
//!
//! An engine is validated once and immutable afterwards, so a single instance
//! can be shared across threads without locking.

mod result;
mod rule;
mod scan;

use std::{collections::HashSet, fmt};

use serde::Deserialize;
use slog::{debug, info, o, Logger};

pub use result::RedactionResult;
pub use rule::RedactionRule;

use crate::error::ConfigurationError;

/// How rules interact when their matches overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// All rules scan the original text. Overlaps resolve to the earliest
    /// start, then the longest span, then the first declared rule. Text a
    /// losing match touched but the winners did not cover is scanned again.
    #[default]
    Merged,
    /// Rules run in declaration order over the cumulative output. Spans
    /// replaced by an earlier rule are never rescanned, and a later match
    /// cannot cross one.
    Sequential,
}

impl EvaluationMode {
    /// Lowercase name, as used in rules documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merged => "merged",
            Self::Sequential => "sequential",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings that are not rules.
#[derive(Clone)]
pub struct EngineOptions {
    mode: EvaluationMode,
    logger: Logger,
}

impl EngineOptions {
    /// Merged evaluation, logging discarded.
    pub fn new() -> Self {
        Self {
            mode: EvaluationMode::default(),
            logger: Logger::root(slog::Discard, o!()),
        }
    }

    /// Selects the evaluation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Logs through `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The evaluation mode.
    pub const fn mode(&self) -> EvaluationMode {
        self.mode
    }
}

impl fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineOptions")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies an ordered set of rules to text.
///
/// `redact` never fails: every check that could reject a rule runs in the
/// constructor.
///
/// ```rust
/// use redstr::{Pattern, RedactionEngine, RedactionRule, Replacement, Sensitivity};
///
/// let pattern = Pattern::literal("secret", Sensitivity::Secret, "secret123")?;
/// let engine = RedactionEngine::new([RedactionRule::new(pattern, Replacement::full_with("***"))])?;
///
/// let result = engine.redact("token=secret123");
/// assert_eq!(result.text(), "token=***");
/// assert_eq!(result.count("secret"), 1);
/// # Ok::<(), redstr::ConfigurationError>(())
/// ```
pub struct RedactionEngine {
    rules: Vec<RedactionRule>,
    mode: EvaluationMode,
    logger: Logger,
}

impl RedactionEngine {
    /// Builds an engine with default options.
    pub fn new<I>(rules: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = RedactionRule>,
    {
        Self::with_options(rules, EngineOptions::default())
    }

    /// Builds an engine, rejecting rule sets that could not redact reliably.
    ///
    /// Rule names must be unique, and no rule may match another rule's fixed
    /// placeholder, otherwise a second pass would redact the first pass's
    /// output.
    pub fn with_options<I>(rules: I, options: EngineOptions) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = RedactionRule>,
    {
        let rules: Vec<RedactionRule> = rules.into_iter().collect();

        let mut names = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !names.insert(rule.name()) {
                return Err(ConfigurationError::DuplicateRule {
                    name: rule.name().to_string(),
                });
            }
        }

        for rule in &rules {
            let Some(placeholder) = rule.replacement().placeholder() else {
                continue;
            };
            if let Some(other) = rules
                .iter()
                .find(|other| other.pattern().spans(placeholder).next().is_some())
            {
                return Err(ConfigurationError::PlaceholderRematches {
                    rule: rule.name().to_string(),
                    placeholder: placeholder.to_string(),
                    matched_by: other.name().to_string(),
                });
            }
        }

        let EngineOptions { mode, logger } = options;
        let logger = logger.new(o!("component" => "redaction_engine"));
        info!(logger, "redaction engine ready";
            "rules" => rules.len(),
            "mode" => mode.as_str()
        );

        Ok(Self {
            rules,
            mode,
            logger,
        })
    }

    /// The rules, in declaration order.
    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    /// The evaluation mode.
    pub const fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Redacts `input`.
    ///
    /// Text with nothing to redact comes back unchanged with no counts.
    pub fn redact(&self, input: &str) -> RedactionResult {
        if self.rules.is_empty() {
            return RedactionResult::unchanged(input);
        }
        let result = match self.mode {
            EvaluationMode::Merged => scan::merged(&self.rules, input),
            EvaluationMode::Sequential => scan::sequential(&self.rules, input),
        };
        if result.is_redacted() {
            debug!(self.logger, "redacted text";
                "input_len" => input.len(),
                "redactions" => result.total(),
                "counts" => &result
            );
        }
        result
    }

    /// Redacts `input`, discarding the counts.
    pub fn redact_str(&self, input: &str) -> String {
        self.redact(input).into_text()
    }
}

impl fmt::Debug for RedactionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionEngine")
            .field("rules", &self.rules)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
