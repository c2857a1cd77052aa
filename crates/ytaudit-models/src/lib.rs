//! Shared data models for the YouTube monetization audit.
//!
//! This crate provides:
//! - The audit report contract returned by the generation service
//! - Risk levels and score bands
//! - YouTube video identifier extraction and thumbnail resolution
//! - Live preview classification for raw user input

pub mod report;
pub mod risk;
pub mod youtube;

pub use report::{AuditCheck, AuditReport, GroundingSource, ReportError, SuggestedComment};
pub use risk::{RiskLevel, ScoreBand};
pub use youtube::{extract_youtube_id, youtube_thumbnail_url, PreviewState};
