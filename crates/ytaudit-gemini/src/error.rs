//! Gemini client error types.

use thiserror::Error;
use ytaudit_models::ReportError;

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Gemini API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Failed to parse audit report: {0}")]
    Report(#[from] ReportError),
}

impl GeminiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Used for diagnostics only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiError::Request(e) => e.is_timeout() || e.is_connect(),
            GeminiError::Status { status, .. } => *status == 429 || *status >= 500,
            GeminiError::EmptyResponse => true,
            GeminiError::Config(_) | GeminiError::InvalidInput(_) | GeminiError::Report(_) => {
                false
            }
        }
    }
}
