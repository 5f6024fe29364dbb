// src/presentation/http/controllers/mod.rs
pub mod content;
pub mod ordering;
pub mod slugs;

use crate::application::{error::ApplicationError, services::NoticeService};
use crate::domain::content::ResourceKind;
use crate::presentation::http::error::{HttpError, HttpResult};

/// Parse the `{resource}` path segment into a known collection.
pub(crate) fn parse_resource(raw: &str, notices: &NoticeService) -> HttpResult<ResourceKind> {
    raw.parse::<ResourceKind>()
        .map_err(|err| HttpError::from_error(ApplicationError::from(err), notices))
}
