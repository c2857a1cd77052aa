use wiremock::MockServer;

use crate::{GeminiClient, GeminiConfig};

pub(crate) fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .with_model("gemini-test")
        .with_base_url(server.uri());
    GeminiClient::new(config).unwrap()
}

/// A `generateContent` body with a single text part.
pub(crate) fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    })
}
