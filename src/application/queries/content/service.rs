use std::sync::Arc;

use crate::domain::content::ContentRepository;

pub struct ContentQueryService {
    pub(super) repo: Arc<dyn ContentRepository>,
}

impl ContentQueryService {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }
}
