//! Built-in rules for common secrets and PII.
//!
//! Order matters only for exact ties in merged mode: more specific rules come
//! first so that, for example, a JWT in a bearer header is reported as `jwt`.
//!
//! Tokens and addresses get fixed placeholders. A partially kept token or
//! address leaves characters that can join the following text into a new
//! match on a second pass.

use crate::{
    engine::RedactionRule, error::ConfigurationError, pattern::Pattern, policy::Replacement,
    sensitivity::Sensitivity,
};

struct BuiltIn {
    name: &'static str,
    sensitivity: Sensitivity,
    regex: &'static str,
    placeholder: Option<&'static str>,
}

const BUILT_INS: &[BuiltIn] = &[
    BuiltIn {
        name: "private_key",
        sensitivity: Sensitivity::Secret,
        regex: r"-----BEGIN[A-Z ]*PRIVATE KEY-----",
        placeholder: Some("[REDACTED:PRIVATE_KEY]"),
    },
    BuiltIn {
        name: "aws_access_key",
        sensitivity: Sensitivity::Credential,
        regex: r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b",
        placeholder: Some("[REDACTED:AWS_ACCESS_KEY]"),
    },
    BuiltIn {
        name: "github_token",
        sensitivity: Sensitivity::Token,
        regex: r"\bgh[pousr]_[A-Za-z0-9]{36,}\b",
        placeholder: Some("[REDACTED:GITHUB_TOKEN]"),
    },
    BuiltIn {
        name: "jwt",
        sensitivity: Sensitivity::Token,
        regex: r"\beyJ[A-Za-z0-9_-]+\.eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+",
        placeholder: Some("[REDACTED:JWT]"),
    },
    BuiltIn {
        name: "bearer_token",
        sensitivity: Sensitivity::Token,
        regex: r"(?i)\bbearer\s+(?P<secret>[A-Za-z0-9_.~+/-]{20,}=*)",
        placeholder: Some("[REDACTED:BEARER]"),
    },
    BuiltIn {
        name: "api_key",
        sensitivity: Sensitivity::Token,
        regex: r#"(?i)\b(?:api[_-]?key|access[_-]?token|secret[_-]?key)\b["']?\s*[:=]\s*["']?(?P<secret>[A-Za-z0-9_-]{16,})"#,
        placeholder: Some("[REDACTED:API_KEY]"),
    },
    BuiltIn {
        name: "password",
        sensitivity: Sensitivity::Secret,
        regex: r#"(?i)\b(?:password|passwd|pwd)\b["']?\s*[:=]\s*["']?(?P<secret>[^\s"'&;,\[\]]+)"#,
        placeholder: None,
    },
    BuiltIn {
        name: "email",
        sensitivity: Sensitivity::Email,
        regex: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}\b",
        placeholder: None,
    },
    BuiltIn {
        name: "ipv4",
        sensitivity: Sensitivity::IpAddress,
        regex: r"\b(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\b",
        placeholder: Some("[REDACTED:IPV4]"),
    },
];

/// The built-in rule set, in evaluation order.
///
/// Rules without an explicit placeholder use their sensitivity's default
/// replacement.
pub fn default_rules() -> Result<Vec<RedactionRule>, ConfigurationError> {
    BUILT_INS
        .iter()
        .map(|built_in| {
            let pattern = Pattern::regex(built_in.name, built_in.sensitivity, built_in.regex)?;
            Ok(match built_in.placeholder {
                Some(placeholder) => {
                    RedactionRule::new(pattern, Replacement::full_with(placeholder))
                }
                None => RedactionRule::with_default_replacement(pattern),
            })
        })
        .collect()
}
