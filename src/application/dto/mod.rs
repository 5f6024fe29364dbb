pub mod content;
pub mod notice;
pub mod ordering;
pub mod response;
pub mod serde_time;
pub mod slugs;

pub use content::{ContentEntityDto, ContentListDto};
pub use notice::{NoticeDto, NoticeLevel};
pub use ordering::ReorderDto;
pub use response::AdminResponse;
pub use slugs::{SlugDraftDto, SlugDto};
