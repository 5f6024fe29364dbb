// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The content API answered with `success: false`.
    #[error("rejected by content api: {0}")]
    Rejected(String),
    #[error("content api unreachable: {0}")]
    Transport(String),
}
