use crate::application::{
    ApplicationResult,
    dto::NoticeDto,
    error::ApplicationError,
    services::{DEFAULT_DISMISS_AFTER, NoticeService},
};
use crate::domain::errors::DomainError;
use crate::infrastructure::time::SystemClock;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Every failure leaves the gateway as a JSON body carrying an error notice.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    notice: NoticeDto,
}

impl HttpError {
    pub fn from_error(err: ApplicationError, notices: &NoticeService) -> Self {
        let status = status_for(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, %status, "request failed");
        } else {
            tracing::warn!(error = %err, %status, "request rejected");
        }
        Self {
            status,
            notice: notices.error(&err),
        }
    }

    /// For failures raised before the request's [`HttpState`] is reachable;
    /// the notice is stamped with the system clock and default lifetime.
    ///
    /// [`HttpState`]: crate::presentation::http::state::HttpState
    pub fn without_state(err: ApplicationError) -> Self {
        let notices = NoticeService::new(Arc::new(SystemClock), DEFAULT_DISMISS_AFTER);
        Self::from_error(err, &notices)
    }
}

fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_)) => {
            StatusCode::BAD_REQUEST
        }
        ApplicationError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
        ApplicationError::Domain(DomainError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Domain(DomainError::Transport(_)) | ApplicationError::PartialFailure(_) => {
            StatusCode::BAD_GATEWAY
        }
        ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            success: false,
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.notice.message.clone(),
            notice: self.notice,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub notice: NoticeDto,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self, notices: &NoticeService) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, notices: &NoticeService) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(err, notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases: [(ApplicationError, StatusCode); 7] = [
            (ApplicationError::validation("x"), StatusCode::BAD_REQUEST),
            (DomainError::NotFound("x".into()).into(), StatusCode::NOT_FOUND),
            (DomainError::Conflict("x".into()).into(), StatusCode::CONFLICT),
            (
                DomainError::Rejected("x".into()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::Transport("x".into()).into(), StatusCode::BAD_GATEWAY),
            (ApplicationError::partial_failure("x"), StatusCode::BAD_GATEWAY),
            (
                ApplicationError::infrastructure("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err}");
        }
    }
}
