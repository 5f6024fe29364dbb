// src/application/commands/content/mod.rs
mod create;
mod delete;
mod service;

pub use create::CreateEntityCommand;
pub use delete::DeleteEntityCommand;
pub use service::ContentCommandService;
