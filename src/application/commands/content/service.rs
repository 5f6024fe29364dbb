use std::sync::Arc;

use crate::{application::ports::util::SlugGenerator, domain::content::ContentRepository};

pub struct ContentCommandService {
    pub(super) repo: Arc<dyn ContentRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl ContentCommandService {
    pub fn new(repo: Arc<dyn ContentRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }
}
