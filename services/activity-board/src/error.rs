//! Error types for the activity board client

/// Reasons an email is refused before any request is made.
///
/// The display strings are shown to the student as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please enter an email address")]
    Empty,

    #[error("Please enter a valid email address")]
    MissingAt,
}

/// Errors that can occur in the activity board client
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}

/// Result type alias for activity board operations
pub type Result<T> = std::result::Result<T, BoardError>;
