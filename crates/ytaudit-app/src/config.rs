//! Application configuration.

use std::str::FromStr;

use tracing::warn;

use crate::error::AppError;

/// What to do with a response that arrives after a reset or after a newer
/// request of the same kind was started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Drop responses whose request generation is no longer current.
    #[default]
    DiscardSuperseded,
    /// Apply every response as it resolves; the last one to arrive wins.
    LastResolvedWins,
}

impl FromStr for ResponsePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard-superseded" | "discard" => Ok(Self::DiscardSuperseded),
            "last-resolved-wins" | "last-wins" => Ok(Self::LastResolvedWins),
            other => Err(AppError::config(format!("unknown response policy: {other}"))),
        }
    }
}

impl std::fmt::Display for ResponsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DiscardSuperseded => write!(f, "discard-superseded"),
            Self::LastResolvedWins => write!(f, "last-resolved-wins"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Stale response handling
    pub response_policy: ResponsePolicy,
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let response_policy = match lookup("YTAUDIT_RESPONSE_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{e}; using {}", ResponsePolicy::default());
                ResponsePolicy::default()
            }),
            None => ResponsePolicy::default(),
        };

        Self { response_policy }
    }
}
