//! Session state and its transitions.
//!
//! [`AppState`] is the read-only view a front-end renders. [`Session`]
//! wraps it with per-flow request generations so the controller can tell a
//! current response from a superseded one.

use serde::Serialize;
use ytaudit_gemini::GeminiResult;
use ytaudit_models::{youtube_thumbnail_url, AuditReport, PreviewState, SuggestedComment};

use crate::config::ResponsePolicy;

/// Shown when an audit request fails for any reason.
pub const AUDIT_ERROR_MESSAGE: &str =
    "Không thể thực hiện kiểm định. Vui lòng thử lại sau hoặc kiểm tra lại link/nội dung.";

/// Shown when a comment request fails for any reason.
pub const COMMENT_ERROR_MESSAGE: &str =
    "Không thể tạo bình luận gợi ý. Vui lòng thử lại sau.";

/// Session view model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Current input, a URL or free text
    pub url: String,
    /// Audit in flight
    pub is_loading: bool,
    /// Last successful audit
    pub report: Option<AuditReport>,
    /// Last user-facing error
    pub error: Option<String>,
    /// Comment generation in flight
    pub is_generating_comment: bool,
    /// Last generated comment
    pub suggested_comment: Option<SuggestedComment>,
}

impl AppState {
    /// Thumbnail for the current input, recomputed on every call.
    pub fn live_thumbnail_url(&self) -> Option<String> {
        youtube_thumbnail_url(&self.url)
    }

    pub fn preview(&self) -> PreviewState {
        PreviewState::classify(&self.url)
    }

    pub fn has_input(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Whether the submit action would start an audit right now.
    pub fn can_submit(&self) -> bool {
        self.has_input() && !self.is_loading
    }
}

/// Which request kind a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Audit,
    Comment,
}

/// Proof that a request was started, carried back when it resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub flow: Flow,
    pub generation: u64,
    /// Input captured when the request started
    pub input: String,
}

/// How a resolved response was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Superseded,
}

/// Mutable session owned by the controller.
#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
    audit_generation: u64,
    comment_generation: u64,
}

impl Session {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_url(&mut self, url: String) {
        self.state.url = url;
    }

    /// Enter the audit-in-flight state.
    ///
    /// Returns `None` for blank input or while an audit is already running.
    pub fn begin_audit(&mut self) -> Option<Ticket> {
        if !self.state.can_submit() {
            return None;
        }

        self.state.is_loading = true;
        self.state.error = None;
        self.state.report = None;
        self.audit_generation += 1;

        Some(Ticket {
            flow: Flow::Audit,
            generation: self.audit_generation,
            input: self.state.url.clone(),
        })
    }

    /// Apply an audit response. The caller logs the failure cause.
    pub fn finish_audit(
        &mut self,
        ticket: &Ticket,
        result: GeminiResult<AuditReport>,
        policy: ResponsePolicy,
    ) -> Resolution {
        if self.is_superseded(ticket, policy) {
            return Resolution::Superseded;
        }

        self.state.is_loading = false;
        match result {
            Ok(report) => self.state.report = Some(report.with_input(&ticket.input)),
            Err(_) => self.state.error = Some(AUDIT_ERROR_MESSAGE.to_string()),
        }
        Resolution::Applied
    }

    /// Enter the comment-in-flight state.
    pub fn begin_comment(&mut self) -> Option<Ticket> {
        if !self.state.has_input() || self.state.is_generating_comment {
            return None;
        }

        self.state.is_generating_comment = true;
        self.state.suggested_comment = None;
        self.state.error = None;
        self.comment_generation += 1;

        Some(Ticket {
            flow: Flow::Comment,
            generation: self.comment_generation,
            input: self.state.url.clone(),
        })
    }

    pub fn finish_comment(
        &mut self,
        ticket: &Ticket,
        result: GeminiResult<SuggestedComment>,
        policy: ResponsePolicy,
    ) -> Resolution {
        if self.is_superseded(ticket, policy) {
            return Resolution::Superseded;
        }

        self.state.is_generating_comment = false;
        match result {
            Ok(comment) => self.state.suggested_comment = Some(comment),
            Err(_) => self.state.error = Some(COMMENT_ERROR_MESSAGE.to_string()),
        }
        Resolution::Applied
    }

    /// Back to the initial state. In-flight requests keep running; their
    /// generations become stale.
    pub fn reset(&mut self) {
        self.state = AppState::default();
        self.audit_generation += 1;
        self.comment_generation += 1;
    }

    fn is_superseded(&self, ticket: &Ticket, policy: ResponsePolicy) -> bool {
        let current = match ticket.flow {
            Flow::Audit => self.audit_generation,
            Flow::Comment => self.comment_generation,
        };
        policy == ResponsePolicy::DiscardSuperseded && ticket.generation != current
    }
}

#[cfg(test)]
mod tests {
    use ytaudit_gemini::GeminiError;
    use ytaudit_models::RiskLevel;

    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn report() -> AuditReport {
        AuditReport {
            monetization_score: 5.0,
            creative_value_score: 4.0,
            summary: "Rủi ro trung bình".into(),
            reused_content_risk: RiskLevel::Medium,
            ai_voice_risk: RiskLevel::High,
            visual_repetition_risk: RiskLevel::Low,
            checklist: vec![],
            expert_recommendations: vec![],
            grounding_sources: None,
            thumbnail_url: None,
            video_url: None,
        }
    }

    fn session_with(url: &str) -> Session {
        let mut session = Session::default();
        session.set_url(url.to_string());
        session
    }

    #[test]
    fn test_blank_input_does_not_start() {
        let mut session = session_with("   ");
        assert_eq!(session.begin_audit(), None);
        assert_eq!(session.begin_comment(), None);
        assert!(!session.state().is_loading);
        assert!(!session.state().is_generating_comment);
    }

    #[test]
    fn test_begin_audit_clears_error_and_report() {
        let mut session = session_with(URL);
        let ticket = session.begin_audit().unwrap();
        session.finish_audit(&ticket, Ok(report()), ResponsePolicy::default());
        session.state.error = Some("old".into());

        let ticket = session.begin_audit().unwrap();
        assert_eq!(ticket.input, URL);
        assert!(session.state().is_loading);
        assert_eq!(session.state().error, None);
        assert_eq!(session.state().report, None);
    }

    #[test]
    fn test_second_audit_is_ignored_while_in_flight() {
        let mut session = session_with(URL);
        assert!(session.begin_audit().is_some());
        assert!(session.begin_audit().is_none());
        // comments run independently
        assert!(session.begin_comment().is_some());
    }

    #[test]
    fn test_audit_success_enriches_report() {
        let mut session = session_with(URL);
        let ticket = session.begin_audit().unwrap();
        // input edited while the request is in flight
        session.set_url("something else".into());

        let resolution = session.finish_audit(&ticket, Ok(report()), ResponsePolicy::default());
        assert_eq!(resolution, Resolution::Applied);

        let state = session.state();
        assert!(!state.is_loading);
        let stored = state.report.as_ref().unwrap();
        assert_eq!(stored.video_url.as_deref(), Some(URL));
        assert_eq!(stored.thumbnail_url, youtube_thumbnail_url(URL));
    }

    #[test]
    fn test_audit_failure_sets_fixed_message() {
        let mut session = session_with(URL);
        let ticket = session.begin_audit().unwrap();
        session.finish_audit(
            &ticket,
            Err(GeminiError::EmptyResponse),
            ResponsePolicy::default(),
        );

        let state = session.state();
        assert!(!state.is_loading);
        assert_eq!(state.report, None);
        assert_eq!(state.error.as_deref(), Some(AUDIT_ERROR_MESSAGE));
    }

    #[test]
    fn test_comment_flow() {
        let mut session = session_with(URL);
        let ticket = session.begin_comment().unwrap();
        assert!(session.state().is_generating_comment);

        session.finish_comment(
            &ticket,
            Ok(SuggestedComment::new("Tuyệt vời!")),
            ResponsePolicy::default(),
        );
        assert!(!session.state().is_generating_comment);
        assert_eq!(
            session.state().suggested_comment,
            Some(SuggestedComment::new("Tuyệt vời!"))
        );

        let ticket = session.begin_comment().unwrap();
        assert_eq!(session.state().suggested_comment, None);
        session.finish_comment(
            &ticket,
            Err(GeminiError::EmptyResponse),
            ResponsePolicy::default(),
        );
        assert_eq!(session.state().error.as_deref(), Some(COMMENT_ERROR_MESSAGE));
    }

    #[test]
    fn test_audit_leaves_comment_untouched() {
        let comment = SuggestedComment::new("Hay quá!");
        let mut session = session_with(URL);
        let ticket = session.begin_comment().unwrap();
        session.finish_comment(&ticket, Ok(comment.clone()), ResponsePolicy::default());

        let ticket = session.begin_audit().unwrap();
        assert_eq!(session.state().suggested_comment.as_ref(), Some(&comment));
        assert!(!session.state().is_generating_comment);

        session.finish_audit(&ticket, Ok(report()), ResponsePolicy::default());
        assert_eq!(session.state().suggested_comment.as_ref(), Some(&comment));
        assert!(!session.state().is_generating_comment);

        let ticket = session.begin_audit().unwrap();
        session.finish_audit(
            &ticket,
            Err(GeminiError::EmptyResponse),
            ResponsePolicy::default(),
        );
        assert_eq!(session.state().suggested_comment.as_ref(), Some(&comment));
        assert_eq!(session.state().error.as_deref(), Some(AUDIT_ERROR_MESSAGE));
    }

    #[test]
    fn test_audit_leaves_in_flight_comment_running() {
        let mut session = session_with(URL);
        let comment = session.begin_comment().unwrap();

        let audit = session.begin_audit().unwrap();
        session.finish_audit(&audit, Ok(report()), ResponsePolicy::default());
        assert!(session.state().is_generating_comment);

        let resolution = session.finish_comment(
            &comment,
            Ok(SuggestedComment::new("Tuyệt!")),
            ResponsePolicy::default(),
        );
        assert_eq!(resolution, Resolution::Applied);
        assert!(session.state().report.is_some());
        assert_eq!(
            session.state().suggested_comment,
            Some(SuggestedComment::new("Tuyệt!"))
        );
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let mut session = session_with(URL);
        let audit = session.begin_audit().unwrap();
        session.finish_audit(&audit, Ok(report()), ResponsePolicy::default());
        session.begin_comment().unwrap();

        session.reset();
        assert_eq!(session.state(), &AppState::default());
    }

    #[test]
    fn test_stale_ticket_after_reset() {
        let mut session = session_with(URL);
        let ticket = session.begin_audit().unwrap();
        session.reset();

        let resolution =
            session.finish_audit(&ticket, Ok(report()), ResponsePolicy::DiscardSuperseded);
        assert_eq!(resolution, Resolution::Superseded);
        assert_eq!(session.state(), &AppState::default());

        let resolution =
            session.finish_audit(&ticket, Ok(report()), ResponsePolicy::LastResolvedWins);
        assert_eq!(resolution, Resolution::Applied);
        assert!(session.state().report.is_some());
    }

    #[test]
    fn test_derived_preview_follows_url() {
        let mut session = session_with(URL);
        assert_eq!(session.state().live_thumbnail_url(), youtube_thumbnail_url(URL));

        session.set_url("review phim".into());
        assert_eq!(session.state().live_thumbnail_url(), None);
        assert_eq!(session.state().preview(), PreviewState::Hidden);
    }
}
