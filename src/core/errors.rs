use crate::models::models::PostId;
use crate::notify::Severity;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

/// Recoverable failures of feed operations. A failed operation leaves the
/// store untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Invalid post: {0}")]
    Validation(String),

    #[error("Post not found: {0}")]
    NotFound(PostId),
}

impl FeedError {
    pub fn severity(&self) -> Severity {
        match self {
            FeedError::Validation(_) => Severity::Warning,
            FeedError::NotFound(_) => Severity::Danger,
        }
    }

    /// Message shown to the user in place of the error.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::Validation(msg) => msg.clone(),
            FeedError::NotFound(_) => "That post is no longer available".to_string(),
        }
    }
}
