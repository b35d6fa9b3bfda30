//! Rule-driven redaction for free text.
//!
//! A host (a scanning proxy, a log pipeline) hands over page content, header
//! values or log lines; [`RedactionEngine::redact`] returns the text with
//! credentials, tokens and PII replaced, plus a per-rule match count.
//!
//! The crate separates:
//! - **Sensitivity**: what kind of data a pattern finds ([`Sensitivity`]).
//! - **Pattern**: how it is found ([`Pattern`], regex or literals).
//! - **Replacement**: how a match is rewritten ([`Replacement`]).
//!
//! Rules are validated once when the engine is built. After that the engine is
//! immutable, `Send + Sync`, and `redact` cannot fail.
//!
//! What this crate does:
//! - compiles and validates rule sets, from code or JSON/TOML documents
//! - ships a built-in rule set ([`default_rules`])
//! - logs through an explicitly supplied `slog::Logger`
//!
//! What it does not do:
//! - intercept traffic or hook into a host's plugin system
//! - configure `slog` drains

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod config;
mod engine;
mod error;
mod integration;
mod pattern;
mod policy;
mod sensitivity;
mod slog;

pub use config::{default_rules, ReplacementConfig, RuleConfig, RulesConfig};
pub use engine::{
    EngineOptions, EvaluationMode, RedactionEngine, RedactionResult, RedactionRule,
};
pub use error::ConfigurationError;
pub use integration::{RedactionIntegration, RuleSource};
pub use pattern::{Pattern, PatternSource, PATTERN_SIZE_LIMIT, SECRET_GROUP};
pub use policy::{KeepConfig, MaskConfig, Replacement, DEFAULT_MASK_CHAR, REDACTED_PLACEHOLDER};
pub use sensitivity::{Sensitivity, UnknownSensitivity};
