use thiserror::Error;

/// Failure modes of a single completion attempt. Only `Transport` is
/// retryable; the service rejecting the request or returning an unreadable
/// body will not improve on an immediate retry.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

impl CompletionError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, CompletionError::Transport(_))
    }
}
