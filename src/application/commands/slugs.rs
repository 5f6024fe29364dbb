// src/application/commands/slugs.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    application::{
        dto::{SlugDraftDto, SlugDto},
        ports::util::SlugGenerator,
    },
    domain::slug::{SlugDraft, SlugFieldEvent},
};

/// Which pass to run over a slug field's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SanitizePhase {
    /// Field has focus: lenient.
    Typing,
    /// Field lost focus: canonical.
    Blur,
}

pub struct ApplySlugEventCommand {
    pub title: String,
    pub slug: String,
    pub event: SlugFieldEvent,
}

pub struct SlugCommandService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugCommandService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Absent titles yield an empty slug.
    pub fn generate(&self, title: Option<&str>) -> SlugDto {
        SlugDto {
            slug: title
                .map(|title| self.generator.slugify(title))
                .unwrap_or_default(),
        }
    }

    pub fn sanitize(&self, input: &str, phase: SanitizePhase) -> SlugDto {
        let slug = match phase {
            SanitizePhase::Typing => self.generator.sanitize_typed(input),
            SanitizePhase::Blur => self.generator.slugify(input),
        };
        SlugDto { slug }
    }

    pub fn apply_event(&self, command: ApplySlugEventCommand) -> SlugDraftDto {
        let mut draft = SlugDraft::from_parts(command.title, command.slug);
        draft.apply(command.event);
        draft.into()
    }
}
