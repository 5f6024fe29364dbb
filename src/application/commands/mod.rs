pub mod content;
pub mod ordering;
pub mod slugs;
