//! Error types for board operations.

use thiserror::Error;

/// Failures surfaced by the activities backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The request never produced a response (fetch rejected).
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl BoardError {
    /// Backend-supplied failure detail, if the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
