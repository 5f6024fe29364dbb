use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::NoticeDto;

/// Success envelope of the admin API, shaped like the content API's
/// `{success, data, message}` so the dashboard can treat both alike.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeDto>,
}

impl<T> AdminResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: NoticeDto) -> Self {
        self.message = Some(notice.message.clone());
        self.notice = Some(notice);
        self
    }
}
