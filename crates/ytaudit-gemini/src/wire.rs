//! `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gemini API request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single user turn with Google Search grounding.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            system_instruction: None,
            tools: vec![Tool::google_search()],
            generation_config: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::text(instruction));
        self
    }

    pub fn with_json_schema(mut self, schema: Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Some(schema),
        });
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// Gemini API response.
///
/// Every field is optional: safety blocks and grounding-only replies omit
/// content.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// Grounding chunks of the first candidate, if the service sent any.
    pub fn grounding_chunks(&self) -> Option<&[GroundingChunk]> {
        let metadata = self.candidates.first()?.grounding_metadata.as_ref()?;
        metadata.grounding_chunks.as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<ResponseContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}
