// src/application/services/mod.rs
mod notices;

use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::{content::ContentCommandService, ordering::OrderReconciler, slugs::SlugCommandService},
        ports::{ClockPort, SlugGeneratorPort},
        queries::content::ContentQueryService,
    },
    domain::content::ContentRepository,
};

pub use notices::{DEFAULT_DISMISS_AFTER, NoticeService};

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub reconciler: Arc<OrderReconciler>,
    pub slugs: Arc<SlugCommandService>,
    pub notices: Arc<NoticeService>,
}

impl ApplicationServices {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        notice_ttl: Duration,
    ) -> Self {
        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_repo),
            Arc::clone(&slugger),
        ));
        let content_queries = Arc::new(ContentQueryService::new(Arc::clone(&content_repo)));
        let reconciler = Arc::new(OrderReconciler::new(Arc::clone(&content_repo)));
        let slugs = Arc::new(SlugCommandService::new(slugger));
        let notices = Arc::new(NoticeService::new(clock, notice_ttl));

        Self {
            content_commands,
            content_queries,
            reconciler,
            slugs,
            notices,
        }
    }
}
