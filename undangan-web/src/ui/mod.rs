pub mod card;
pub use card::{read_more, render, render_node, render_reply};

mod comments;
pub use comments::CommentsContainer;

mod forms;
pub use forms::{edit_form, reply_form};
