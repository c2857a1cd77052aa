//! Generation service seam used by the application controller.

use async_trait::async_trait;
use ytaudit_models::{AuditReport, SuggestedComment};

use crate::client::GeminiClient;
use crate::error::GeminiResult;

/// Produces audits and comments for raw user input.
#[async_trait]
pub trait MonetizationAuditor: Send + Sync {
    /// Structured audit, without locally derived fields.
    async fn audit(&self, input: &str) -> GeminiResult<AuditReport>;

    /// Free-text promotional comment.
    async fn suggest_comment(&self, input: &str) -> GeminiResult<SuggestedComment>;
}

#[async_trait]
impl MonetizationAuditor for GeminiClient {
    async fn audit(&self, input: &str) -> GeminiResult<AuditReport> {
        self.perform_audit(input).await
    }

    async fn suggest_comment(&self, input: &str) -> GeminiResult<SuggestedComment> {
        self.generate_comment(input).await
    }
}
