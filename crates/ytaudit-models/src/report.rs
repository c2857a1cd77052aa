//! Audit report models.
//!
//! [`AuditReport`] is the contract between this application and the
//! generation service. The service produces every field except
//! `groundingSources`, `thumbnailUrl` and `videoUrl`, which are derived
//! locally after the call.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::risk::{RiskLevel, ScoreBand};
use crate::youtube::youtube_thumbnail_url;

/// Intended range of both scores. Not enforced by the contract.
pub const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Errors raised while turning model output into an [`AuditReport`].
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report is not valid JSON for the audit schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report violates the audit contract: {0}")]
    Contract(#[from] ValidationErrors),
}

/// One row of the audit checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AuditCheck {
    #[validate(length(min = 1))]
    pub item: String,
    pub passed: bool,
    pub comment: String,
}

/// A citation the search-grounded generation used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Structured monetization audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// 0 to 10
    pub monetization_score: f64,

    /// 0 to 10
    pub creative_value_score: f64,

    #[validate(length(min = 1))]
    pub summary: String,

    pub reused_content_risk: RiskLevel,
    pub ai_voice_risk: RiskLevel,
    pub visual_repetition_risk: RiskLevel,

    /// Service presentation order is preserved.
    #[validate(nested)]
    pub checklist: Vec<AuditCheck>,

    /// Ranked, most important first.
    pub expert_recommendations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_sources: Option<Vec<GroundingSource>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// The raw input the audit was requested for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// The fields the generation service is asked to produce. Anything else
/// it sends, including the locally derived fields, is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelReport {
    monetization_score: f64,
    creative_value_score: f64,
    summary: String,
    reused_content_risk: RiskLevel,
    ai_voice_risk: RiskLevel,
    visual_repetition_risk: RiskLevel,
    checklist: Vec<AuditCheck>,
    expert_recommendations: Vec<String>,
}

impl From<ModelReport> for AuditReport {
    fn from(m: ModelReport) -> Self {
        Self {
            monetization_score: m.monetization_score,
            creative_value_score: m.creative_value_score,
            summary: m.summary,
            reused_content_risk: m.reused_content_risk,
            ai_voice_risk: m.ai_voice_risk,
            visual_repetition_risk: m.visual_repetition_risk,
            checklist: m.checklist,
            expert_recommendations: m.expert_recommendations,
            grounding_sources: None,
            thumbnail_url: None,
            video_url: None,
        }
    }
}

impl AuditReport {
    /// Parse the text the generation service returned for an audit call.
    ///
    /// A surrounding markdown code fence is tolerated. Locally derived
    /// fields are never taken from the service.
    pub fn from_model_json(text: &str) -> Result<Self, ReportError> {
        let model: ModelReport = serde_json::from_str(strip_code_fence(text))?;
        let report = AuditReport::from(model);
        report.validate()?;
        Ok(report)
    }

    /// Attach the fields derived from the audited input.
    pub fn with_input(mut self, input: &str) -> Self {
        self.thumbnail_url = youtube_thumbnail_url(input);
        self.video_url = Some(input.to_string());
        self
    }

    pub fn scores_in_range(&self) -> bool {
        SCORE_RANGE.contains(&self.monetization_score)
            && SCORE_RANGE.contains(&self.creative_value_score)
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.monetization_score)
    }

    /// Worst of the three risk axes.
    pub fn highest_risk(&self) -> RiskLevel {
        self.reused_content_risk
            .max(self.ai_voice_risk)
            .max(self.visual_repetition_risk)
    }

    pub fn passed_checks(&self) -> usize {
        self.checklist.iter().filter(|c| c.passed).count()
    }

    pub fn sources(&self) -> &[GroundingSource] {
        self.grounding_sources.as_deref().unwrap_or_default()
    }
}

/// Free-text promotional comment. Length is guided by the prompt only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestedComment(String);

impl SuggestedComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SuggestedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remove a ```json ... ``` wrapper if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
