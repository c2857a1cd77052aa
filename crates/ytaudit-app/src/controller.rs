//! Application state controller.
//!
//! The controller is the only writer of the session. Each action runs in
//! three steps: begin under the lock, await the service without the lock,
//! finish under the lock. The audit and comment flows are independent and
//! may be in flight at the same time.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, info};
use ytaudit_gemini::MonetizationAuditor;

use crate::config::{AppConfig, ResponsePolicy};
use crate::state::{AppState, Resolution, Session};

/// Result of a start action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Blank input, or the same flow was already in flight. No request made.
    Ignored,
    /// The response was written to the session.
    Applied,
    /// The response arrived after a reset or a newer request and was dropped.
    Superseded,
}

impl From<Resolution> for ActionOutcome {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Applied => ActionOutcome::Applied,
            Resolution::Superseded => ActionOutcome::Superseded,
        }
    }
}

/// Owns the session and sequences requests against a [`MonetizationAuditor`].
pub struct AuditController<S> {
    service: S,
    policy: ResponsePolicy,
    session: Mutex<Session>,
}

impl<S: MonetizationAuditor> AuditController<S> {
    pub fn new(service: S, config: AppConfig) -> Self {
        Self {
            service,
            policy: config.response_policy,
            session: Mutex::new(Session::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// Snapshot of the current session.
    pub fn state(&self) -> AppState {
        self.with_session(|s| s.state().clone())
    }

    /// Replace the input field.
    pub fn set_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.with_session(|s| s.set_url(url));
    }

    /// Run an audit for the current input.
    pub async fn start_audit(&self) -> ActionOutcome {
        let Some(ticket) = self.with_session(Session::begin_audit) else {
            debug!("Audit not started");
            return ActionOutcome::Ignored;
        };

        info!(generation = ticket.generation, input = %ticket.input, "Audit started");
        let result = self.service.audit(&ticket.input).await;
        if let Err(e) = &result {
            error!(generation = ticket.generation, error = %e, "Audit failed");
        }

        let resolution = self.with_session(|s| s.finish_audit(&ticket, result, self.policy));
        if resolution == Resolution::Superseded {
            debug!(generation = ticket.generation, "Discarding superseded audit response");
        }
        resolution.into()
    }

    /// Generate a promotional comment for the current input.
    pub async fn start_comment(&self) -> ActionOutcome {
        let Some(ticket) = self.with_session(Session::begin_comment) else {
            debug!("Comment generation not started");
            return ActionOutcome::Ignored;
        };

        info!(generation = ticket.generation, input = %ticket.input, "Comment generation started");
        let result = self.service.suggest_comment(&ticket.input).await;
        if let Err(e) = &result {
            error!(generation = ticket.generation, error = %e, "Comment generation failed");
        }

        let resolution = self.with_session(|s| s.finish_comment(&ticket, result, self.policy));
        if resolution == Resolution::Superseded {
            debug!(generation = ticket.generation, "Discarding superseded comment response");
        }
        resolution.into()
    }

    /// Clear everything. Does not cancel requests already in flight.
    pub fn reset(&self) {
        info!("Session reset");
        self.with_session(Session::reset);
    }

    // Never held across an await.
    fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
