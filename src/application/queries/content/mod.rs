mod list;
mod service;

pub use list::ListEntitiesQuery;
pub use service::ContentQueryService;
