//! Gemini client for the monetization audit.
//!
//! Two call shapes are supported against the `generateContent` endpoint,
//! both with Google Search grounding enabled:
//! - a schema-constrained audit returning an [`AuditReport`]
//! - a free-text promotional comment
//!
//! [`AuditReport`]: ytaudit_models::AuditReport

pub mod audit;
pub mod client;
pub mod comment;
pub mod config;
pub mod error;
pub mod service;
mod wire;

#[cfg(test)]
mod test_support;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiResult};
pub use service::MonetizationAuditor;
