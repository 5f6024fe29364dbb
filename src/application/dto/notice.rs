use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient banner shown by the dashboard; dismissed after
/// `dismiss_after_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoticeDto {
    pub level: NoticeLevel,
    pub message: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    pub dismiss_after_ms: u64,
}
