use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    /// One or both sides of a paired update failed; server state is unknown
    /// until the next successful fetch.
    #[error("reorder incomplete: {0}")]
    PartialFailure(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn partial_failure(msg: impl Into<String>) -> Self {
        Self::PartialFailure(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Text suitable for a user-facing notice. Rejections from the content
    /// API carry their own message and are shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::Rejected(msg)) => msg.clone(),
            Self::Domain(DomainError::Transport(_)) => {
                "content service is unreachable, please try again".into()
            }
            other => other.to_string(),
        }
    }
}
