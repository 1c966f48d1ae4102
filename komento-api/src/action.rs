use crate::CommentId;

/// A mutation request on one question's comments
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Action {
    Add {
        id: CommentId,
        content: String,
        parent_id: Option<CommentId>,
    },
    Edit {
        id: CommentId,
        content: String,
    },
    /// Removes the comment and all of its replies, transitively
    Delete(CommentId),
    Vote {
        id: CommentId,
        delta: i64,
    },
}

impl Action {
    /// Generates the id of the comment to be created
    pub fn add(content: String, parent_id: Option<CommentId>) -> Action {
        Action::Add {
            id: CommentId::new(),
            content,
            parent_id,
        }
    }

    pub fn target(&self) -> &CommentId {
        match self {
            Action::Add { id, .. } => id,
            Action::Edit { id, .. } => id,
            Action::Delete(id) => id,
            Action::Vote { id, .. } => id,
        }
    }
}
