mod apply;
pub use apply::apply;

mod order;
pub use order::OrderExt;

mod storage;
pub use storage::{decode, encode, load, save, Backend, MemoryBackend};

mod store;
pub use store::CommentStore;

mod tree;
pub use tree::{build_tree, can_reply, CommentNode, MAX_REPLY_DEPTH};

mod vote;
pub use vote::VoteTracker;

#[cfg(test)]
mod fuzz;

pub mod api {
    pub use komento_api::*;
}

pub mod prelude {
    pub use crate::OrderExt;
}
