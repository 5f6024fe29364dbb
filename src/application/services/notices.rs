use std::{sync::Arc, time::Duration};

use crate::application::{
    dto::{NoticeDto, NoticeLevel},
    error::ApplicationError,
    ports::time::Clock,
};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(4000);

/// Builds the transient banners attached to admin responses.
pub struct NoticeService {
    clock: Arc<dyn Clock>,
    dismiss_after: Duration,
}

impl NoticeService {
    pub fn new(clock: Arc<dyn Clock>, dismiss_after: Duration) -> Self {
        Self {
            clock,
            dismiss_after,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> NoticeDto {
        self.build(NoticeLevel::Success, message.into())
    }

    pub fn error(&self, err: &ApplicationError) -> NoticeDto {
        self.build(NoticeLevel::Error, err.user_message())
    }

    fn build(&self, level: NoticeLevel, message: String) -> NoticeDto {
        NoticeDto {
            level,
            message,
            issued_at: self.clock.now(),
            dismiss_after_ms: u64::try_from(self.dismiss_after.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
