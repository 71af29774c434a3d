mod comment;
pub use comment::CommentNode;

mod markup;
pub use markup::{escape_html, transform};

mod relative_time;
pub use relative_time::{format_elapsed, time_ago, INVALID_DATE};

mod session;
pub use session::Session;

mod store;
pub use store::{Bucket, MemoryStore, Store, COMMENT, CONFIG, USER};

mod theme;
pub use theme::{Locale, Theme};

mod visibility;
pub use visibility::VisibilityState;

pub mod api {
    pub use undangan_api::*;
}
