//! Errors raised while wiring the toggle into its environment.
//!
//! The controller itself never fails; these cover the browser shim and
//! configuration parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body element")]
    NoBody,

    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("invalid toggle config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
