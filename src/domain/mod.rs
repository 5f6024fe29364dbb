pub mod content;
pub mod errors;
pub mod ordering;
pub mod slug;
