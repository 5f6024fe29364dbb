use crate::domain::slug::SlugDraft;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugDraftDto {
    pub title: String,
    pub slug: String,
    pub manually_edited: bool,
}

impl From<SlugDraft> for SlugDraftDto {
    fn from(draft: SlugDraft) -> Self {
        Self {
            manually_edited: draft.is_manually_edited(),
            title: draft.title().to_string(),
            slug: draft.slug().to_string(),
        }
    }
}
