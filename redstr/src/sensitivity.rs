//! Categories for "what kind of sensitive data is this?"
//!
//! A sensitivity tags each pattern and picks the replacement used when a rule
//! does not name one explicitly.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::policy::Replacement;

/// Category tag attached to every pattern.
///
/// Names are `snake_case` in rules documents (`"ip_address"`, `"token"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Account identifiers.
    AccountId,
    /// Blockchain addresses (e.g. Ethereum, Bitcoin).
    BlockchainAddress,
    /// Login credentials and cloud access keys.
    Credential,
    /// Credit card numbers or PANs.
    CreditCard,
    /// Dates of birth.
    DateOfBirth,
    /// Email addresses.
    Email,
    /// IP addresses.
    IpAddress,
    /// Government-issued identifiers.
    NationalId,
    /// Phone numbers.
    PhoneNumber,
    /// Personally identifiable information not covered elsewhere.
    Pii,
    /// Passwords and private keys.
    Secret,
    /// Session identifiers.
    SessionId,
    /// Authentication tokens and API keys.
    Token,
}

impl Sensitivity {
    /// Every sensitivity, in name order.
    pub const ALL: [Self; 13] = [
        Self::AccountId,
        Self::BlockchainAddress,
        Self::Credential,
        Self::CreditCard,
        Self::DateOfBirth,
        Self::Email,
        Self::IpAddress,
        Self::NationalId,
        Self::PhoneNumber,
        Self::Pii,
        Self::Secret,
        Self::SessionId,
        Self::Token,
    ];

    /// The `snake_case` name used in rules documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountId => "account_id",
            Self::BlockchainAddress => "blockchain_address",
            Self::Credential => "credential",
            Self::CreditCard => "credit_card",
            Self::DateOfBirth => "date_of_birth",
            Self::Email => "email",
            Self::IpAddress => "ip_address",
            Self::NationalId => "national_id",
            Self::PhoneNumber => "phone_number",
            Self::Pii => "pii",
            Self::Secret => "secret",
            Self::SessionId => "session_id",
            Self::Token => "token",
        }
    }

    /// Replacement applied when a rule leaves it unspecified.
    pub fn default_replacement(self) -> Replacement {
        match self {
            Self::Credential | Self::Secret | Self::DateOfBirth => Replacement::default_full(),
            Self::Email => Replacement::keep_first(2),
            Self::PhoneNumber => Replacement::keep_last(2),
            Self::BlockchainAddress => Replacement::keep_last(6),
            Self::AccountId
            | Self::CreditCard
            | Self::IpAddress
            | Self::NationalId
            | Self::Pii
            | Self::SessionId
            | Self::Token => Replacement::keep_last(4),
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any [`Sensitivity`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSensitivity(pub String);

impl fmt::Display for UnknownSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sensitivity `{}`", self.0)
    }
}

impl std::error::Error for UnknownSensitivity {}

impl FromStr for Sensitivity {
    type Err = UnknownSensitivity;

    /// Parses the `snake_case` name. Matching is exact: `"Token"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sensitivity| sensitivity.as_str() == s)
            .ok_or_else(|| UnknownSensitivity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Sensitivity;
    use crate::policy::REDACTED_PLACEHOLDER;

    #[test]
    fn names_round_trip_through_from_str() {
        for sensitivity in Sensitivity::ALL {
            assert_eq!(sensitivity.as_str().parse::<Sensitivity>(), Ok(sensitivity));
        }
    }

    #[test]
    fn unknown_and_miscased_names_are_rejected() {
        assert!("api_token".parse::<Sensitivity>().is_err());
        assert!("Token".parse::<Sensitivity>().is_err());
        assert!("".parse::<Sensitivity>().is_err());
    }

    #[test]
    fn serde_name_matches_display() {
        let json = serde_json::to_string(&Sensitivity::IpAddress).unwrap();
        assert_eq!(json, "\"ip_address\"");
        assert_eq!(Sensitivity::IpAddress.to_string(), "ip_address");
    }

    #[test]
    fn default_replacements_follow_category() {
        assert_eq!(
            Sensitivity::Credential
                .default_replacement()
                .apply_to("hunter2"),
            REDACTED_PLACEHOLDER
        );
        assert_eq!(
            Sensitivity::Token.default_replacement().apply_to("abcdef"),
            "**cdef"
        );
        assert_eq!(
            Sensitivity::Email
                .default_replacement()
                .apply_to("alice@example.com"),
            "al***************"
        );
        assert_eq!(
            Sensitivity::PhoneNumber
                .default_replacement()
                .apply_to("5550100"),
            "*****00"
        );
        assert_eq!(
            Sensitivity::BlockchainAddress
                .default_replacement()
                .apply_to("abcdef123456"),
            "******123456"
        );
    }
}
