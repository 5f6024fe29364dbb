mod move_entity;
mod reconciler;

pub use move_entity::MoveEntityCommand;
pub use reconciler::{OrderReconciler, ReorderOutcome};
