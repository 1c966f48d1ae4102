use std::{fmt, str::FromStr};

use crate::{Time, Uuid, STUB_UUID};

/// Author shown for every comment, there is no notion of identity yet
pub const AUTHOR_PLACEHOLDER: &str = "User";

/// Opaque comment identifier.
///
/// New comments get a v4 UUID, but any non-empty string read back from
/// storage is accepted, so that collections written by older clients (which
/// used millisecond timestamps) stay readable.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    pub fn new() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }

    pub fn stub() -> CommentId {
        CommentId(STUB_UUID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CommentId {
    type Err = String;

    fn from_str(s: &str) -> Result<CommentId, String> {
        match s.trim() {
            "" => Err(String::from("comment ids cannot be empty")),
            s => Ok(CommentId(String::from(s))),
        }
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl QuestionId {
    /// Key under which the flat comment collection of this question is stored
    pub fn storage_key(&self) -> String {
        format!("comments-{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One comment as it is persisted, replies are only ever derived from `parent_id`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub question_id: QuestionId,
    pub content: String,
    pub author: String,
    pub created_at: Time,
    pub updated_at: Time,

    /// None for top-level comments
    pub parent_id: Option<CommentId>,

    /// Net vote count, can go negative
    pub votes: i64,
}

impl Comment {
    pub fn new(
        id: CommentId,
        question_id: QuestionId,
        parent_id: Option<CommentId>,
        content: String,
        now: Time,
    ) -> Comment {
        Comment {
            id,
            question_id,
            content,
            author: String::from(AUTHOR_PLACEHOLDER),
            created_at: now,
            updated_at: now,
            parent_id,
            votes: 0,
        }
    }

    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}
