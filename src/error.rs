//! Persistence errors surfaced to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request never got an answer (offline, DNS, CORS, ...)
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("server answered {status} to {action}")]
    Status { action: &'static str, status: u16 },
    /// The server answered but the body was not a plan
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for PlanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlanError::Decode(err.to_string())
        } else {
            PlanError::Transport(err.to_string())
        }
    }
}
