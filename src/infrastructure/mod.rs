pub mod content_api;
pub mod time;
pub mod util;
