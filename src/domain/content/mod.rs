pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::ContentEntity;
pub use repository::ContentRepository;
pub use value_objects::{EntityId, ListFilter, ResourceKind};
