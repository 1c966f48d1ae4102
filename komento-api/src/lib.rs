use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod action;
pub use action::Action;

mod comment;
pub use comment::{Comment, CommentId, QuestionId, AUTHOR_PLACEHOLDER};

mod error;
pub use error::Error;

mod order;
pub use order::SortOrder;

mod question;
pub use question::{search_questions, Question, MAX_SEARCH_RESULTS};

mod vote;
pub use vote::{VoteDirection, VoteState};
