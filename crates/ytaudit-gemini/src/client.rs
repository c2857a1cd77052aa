//! Gemini API client.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> GeminiResult<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Call `generateContent` once. No retries.
    pub(crate) async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        debug!(model = %self.config.model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model = %self.config.model, status = status.as_u16(), "Gemini API returned an error");
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Reject blank input before any network call.
pub(crate) fn require_input(input: &str) -> GeminiResult<&str> {
    if input.trim().is_empty() {
        return Err(GeminiError::invalid_input("input must not be blank"));
    }
    Ok(input)
}
