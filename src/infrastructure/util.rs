use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::{generate_slug, sanitize_typed_slug};

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }

    fn sanitize_typed(&self, input: &str) -> String {
        sanitize_typed_slug(input)
    }
}
