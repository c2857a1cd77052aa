//! Gemini client configuration.

use std::time::Duration;

use crate::error::{GeminiError, GeminiResult};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API credential
    pub api_key: String,
    /// Model used for both audit and comment calls
    pub model: String,
    /// API root, overridable for tests and proxies
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP client default.
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// `GEMINI_API_KEY` is preferred; `API_KEY` is accepted as a fallback.
    pub fn from_env() -> GeminiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GeminiResult<Self> {
        let non_blank = |name: &str| lookup(name).filter(|k| !k.trim().is_empty());
        let api_key = non_blank("GEMINI_API_KEY")
            .or_else(|| non_blank("API_KEY"))
            .ok_or_else(|| GeminiError::config("GEMINI_API_KEY not set"))?;

        Ok(Self {
            api_key,
            model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: lookup("GEMINI_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = GeminiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, GeminiError::Config(_)));

        let err = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, GeminiError::Config(_)));
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_api_key_fallback_and_overrides() {
        let config = GeminiConfig::from_lookup(lookup(&[
            ("API_KEY", "legacy"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GEMINI_BASE_URL", "http://localhost:9000/"),
            ("GEMINI_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "legacy");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_blank_primary_key_falls_back() {
        let config = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", ""),
            ("API_KEY", "real-key"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "real-key");

        let config = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "legacy"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "primary");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::new("super-secret");
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
