pub mod draft;
pub mod generator;
pub mod value_objects;

pub use draft::{SlugDraft, SlugFieldEvent};
pub use generator::{generate_slug, sanitize_typed_slug};
pub use value_objects::Slug;
