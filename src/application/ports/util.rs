// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Canonical slug for `input`.
    fn slugify(&self, input: &str) -> String;

    /// Lenient pass applied while a slug field is being typed into.
    fn sanitize_typed(&self, input: &str) -> String;
}
