use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback text cannot be empty")]
    EmptyText,
    #[error("feedback context cannot be empty")]
    EmptyContext,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid feedback kind: {0}")]
    InvalidKind(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode feedback: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("feedback delivery failed: {0}")]
    Delivery(String),
    #[error("feedback sink unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
