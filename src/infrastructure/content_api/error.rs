use crate::domain::errors::DomainError;
use reqwest::StatusCode;

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_decode() {
        return DomainError::Transport(format!("malformed response: {err}"));
    }
    DomainError::Transport(err.to_string())
}

/// Failure reported by the content API, either as `success: false` or as a
/// non-2xx status.
pub fn map_rejection(status: StatusCode, message: Option<String>) -> DomainError {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("content api responded with {status}"));
    match status {
        StatusCode::NOT_FOUND => DomainError::NotFound(message),
        StatusCode::CONFLICT => DomainError::Conflict(message),
        _ => DomainError::Rejected(message),
    }
}
