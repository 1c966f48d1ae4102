mod app;
pub use app::{App, AppMsg};

mod comment_item;
pub use comment_item::{CommentAction, CommentItem};

mod comment_section;
pub use comment_section::CommentSection;

mod search_bar;
pub use search_bar::SearchBar;
