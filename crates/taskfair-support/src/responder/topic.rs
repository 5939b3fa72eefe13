//! Support topics the canned-response table is keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a known topic key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic key: '{0}'")]
pub struct ParseTopicError(pub String);

/// Identifies one canned answer in the response table.
///
/// Every quick action points at a topic, and the free-text keyword rules
/// resolve to one. `General` doubles as the session greeting and as the
/// defensive fallback for quick actions nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    PaymentHelp,
    AccountSecurity,
    HowToPost,
    FindTaskers,
    DisputeHelp,
    General,
}

impl Topic {
    /// All topics, in the order they are presented to users.
    pub const ALL: [Topic; 6] = [
        Topic::PaymentHelp,
        Topic::AccountSecurity,
        Topic::HowToPost,
        Topic::FindTaskers,
        Topic::DisputeHelp,
        Topic::General,
    ];

    /// The topics a user can ask about, i.e. everything except `General`.
    pub const SUPPORTED: [Topic; 5] = [
        Topic::PaymentHelp,
        Topic::AccountSecurity,
        Topic::HowToPost,
        Topic::FindTaskers,
        Topic::DisputeHelp,
    ];

    /// Stable string key for this topic.
    pub fn key(self) -> &'static str {
        match self {
            Topic::PaymentHelp => "payment-help",
            Topic::AccountSecurity => "account-security",
            Topic::HowToPost => "how-to-post",
            Topic::FindTaskers => "find-taskers",
            Topic::DisputeHelp => "dispute-help",
            Topic::General => "general",
        }
    }

    /// Short human-readable label, used when listing what the assistant
    /// can help with.
    pub fn label(self) -> &'static str {
        match self {
            Topic::PaymentHelp => "payments and escrow",
            Topic::AccountSecurity => "account security",
            Topic::HowToPost => "posting a task",
            Topic::FindTaskers => "finding taskers",
            Topic::DisputeHelp => "disputes and refunds",
            Topic::General => "general questions",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment-help" => Ok(Topic::PaymentHelp),
            "account-security" => Ok(Topic::AccountSecurity),
            "how-to-post" => Ok(Topic::HowToPost),
            "find-taskers" => Ok(Topic::FindTaskers),
            "dispute-help" => Ok(Topic::DisputeHelp),
            "general" => Ok(Topic::General),
            _ => Err(ParseTopicError(s.to_string())),
        }
    }
}
