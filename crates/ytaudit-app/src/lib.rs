//! Session controller for the monetization audit.
//!
//! This crate provides:
//! - [`AppState`], the single session view model
//! - [`AuditController`], which sequences audit and comment requests
//! - Terminal rendering used by the `ytaudit` binary

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod render;
pub mod state;

pub use config::{AppConfig, ResponsePolicy};
pub use controller::{ActionOutcome, AuditController};
pub use error::{AppError, AppResult};
pub use state::{AppState, AUDIT_ERROR_MESSAGE, COMMENT_ERROR_MESSAGE};
