// src/domain/slug/draft.rs
use super::generator::{generate_slug, sanitize_typed_slug};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input to the title/slug pair of an edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlugFieldEvent {
    TitleChanged { title: String },
    SlugTyped { value: String },
    SlugBlurred,
    Regenerate,
    Reset,
}

/// Title and slug of an entity being edited.
///
/// The slug follows the title for as long as it equals what the generator
/// produces for the current title (or is empty). Once it diverges it is
/// treated as manually edited and title changes leave it alone until it is
/// regenerated, cleared, or the form is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugDraft {
    title: String,
    slug: String,
}

impl SlugDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_manually_edited(&self) -> bool {
        !self.slug.is_empty() && self.slug != generate_slug(&self.title)
    }

    pub fn apply(&mut self, event: SlugFieldEvent) {
        match event {
            SlugFieldEvent::TitleChanged { title } => self.change_title(title),
            SlugFieldEvent::SlugTyped { value } => self.slug = sanitize_typed_slug(&value),
            SlugFieldEvent::SlugBlurred => self.slug = generate_slug(&self.slug),
            SlugFieldEvent::Regenerate => self.slug = generate_slug(&self.title),
            SlugFieldEvent::Reset => *self = Self::new(),
        }
    }

    fn change_title(&mut self, title: String) {
        // Compared against the outgoing title.
        let follows_title = !self.is_manually_edited();
        self.title = title;
        if follows_title {
            self.slug = generate_slug(&self.title);
        }
    }
}
