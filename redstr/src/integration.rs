//! Host-facing wrapper around the engine.
//!
//! A scanning host wants redaction to be optional: a broken rules file should
//! switch the feature off, not take the host down. [`RedactionIntegration`]
//! never fails to construct. When activation fails it logs the error and
//! passes text through untouched.

use std::{fmt, path::PathBuf};

use slog::{error, info, o, warn, Logger};

use crate::{
    config::RulesConfig,
    engine::{RedactionEngine, RedactionResult},
    error::ConfigurationError,
};

/// Where the rules come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSource {
    /// The built-in rule set.
    Defaults,
    /// A `.json` or `.toml` rules file.
    File(PathBuf),
    /// An inline JSON rules document.
    Json(String),
    /// An inline TOML rules document.
    #[cfg(feature = "toml")]
    Toml(String),
}

impl RuleSource {
    fn load(&self) -> Result<RulesConfig, ConfigurationError> {
        match self {
            Self::Defaults => Ok(RulesConfig::defaults()),
            Self::File(path) => RulesConfig::from_path(path),
            Self::Json(source) => RulesConfig::from_json_str(source),
            #[cfg(feature = "toml")]
            Self::Toml(source) => RulesConfig::from_toml_str(source),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Defaults => "defaults".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Json(_) => "inline json".to_string(),
            #[cfg(feature = "toml")]
            Self::Toml(_) => "inline toml".to_string(),
        }
    }
}

/// Redaction as a feature the host can switch on and off.
pub struct RedactionIntegration {
    engine: Option<RedactionEngine>,
    activation_error: Option<ConfigurationError>,
    enabled: bool,
    logger: Logger,
}

impl RedactionIntegration {
    /// Loads rules from `source` and builds the engine.
    ///
    /// Failure leaves the integration inactive; the error is logged and kept
    /// for [`RedactionIntegration::activation_error`].
    pub fn activate(source: &RuleSource, logger: &Logger) -> Self {
        let logger = logger.new(o!("component" => "redaction_integration"));
        let source_name = source.describe();
        let built = source
            .load()
            .and_then(|config| config.build(logger.clone()));

        match built {
            Ok(engine) => {
                info!(logger, "redaction active";
                    "source" => &source_name,
                    "rules" => engine.rules().len()
                );
                Self {
                    engine: Some(engine),
                    activation_error: None,
                    enabled: true,
                    logger,
                }
            }
            Err(err) => {
                error!(logger, "redaction disabled: invalid configuration";
                    "source" => &source_name,
                    "error" => %err
                );
                Self {
                    engine: None,
                    activation_error: Some(err),
                    enabled: false,
                    logger,
                }
            }
        }
    }

    /// Wraps an engine the host built itself.
    pub fn with_engine(engine: RedactionEngine, logger: &Logger) -> Self {
        Self {
            engine: Some(engine),
            activation_error: None,
            enabled: true,
            logger: logger.new(o!("component" => "redaction_integration")),
        }
    }

    /// Returns `true` when text will actually be redacted.
    pub const fn is_active(&self) -> bool {
        self.enabled && self.engine.is_some()
    }

    /// Returns `true` unless redaction was switched off or never activated.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switches redaction on or off.
    ///
    /// Enabling an integration whose activation failed has no effect.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && self.engine.is_none() {
            warn!(self.logger, "cannot enable redaction without a valid configuration");
            return;
        }
        self.enabled = enabled;
        info!(self.logger, "redaction enabled changed"; "enabled" => enabled);
    }

    /// The engine, if activation succeeded.
    pub const fn engine(&self) -> Option<&RedactionEngine> {
        self.engine.as_ref()
    }

    /// Why activation failed, if it did.
    pub const fn activation_error(&self) -> Option<&ConfigurationError> {
        self.activation_error.as_ref()
    }

    /// Redacts `text` when active, otherwise returns it unchanged.
    pub fn redact(&self, text: &str) -> RedactionResult {
        match &self.engine {
            Some(engine) if self.enabled => engine.redact(text),
            _ => RedactionResult::unchanged(text),
        }
    }
}

impl fmt::Debug for RedactionIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionIntegration")
            .field("engine", &self.engine)
            .field("activation_error", &self.activation_error)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
