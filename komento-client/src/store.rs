use chrono::Utc;

use crate::{
    api::{Action, Comment, CommentId, Error, QuestionId, SortOrder, VoteDirection, VoteState},
    apply, build_tree, storage, Backend, CommentNode, OrderExt, VoteTracker,
};

/// The comments of one question, as seen by one viewer.
///
/// Every mutation is persisted before being adopted: when saving fails, the
/// error is returned and neither the comments nor the viewer's votes change.
pub struct CommentStore<B> {
    question: QuestionId,
    backend: B,
    comments: Vec<Comment>,
    votes: VoteTracker,
}

impl<B: Backend> CommentStore<B> {
    pub fn open(backend: B, question: QuestionId) -> Result<CommentStore<B>, Error> {
        let comments = storage::load(&backend, question)?;
        tracing::debug!(%question, num_comments = comments.len(), "opened comment store");
        Ok(CommentStore {
            question,
            backend,
            comments,
            votes: VoteTracker::new(),
        })
    }

    /// The flat collection, in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *id)
    }

    pub fn vote_state(&self, id: &CommentId) -> VoteState {
        self.votes.get(id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tree(&self, order: SortOrder) -> Vec<CommentNode> {
        let mut forest = build_tree(&self.comments, self.question);
        order.sort(&mut forest);
        forest
    }

    /// Returns whether `action` changed anything
    pub fn perform(&mut self, action: &Action) -> Result<bool, Error> {
        let next = match apply(&self.comments, self.question, action, Utc::now()) {
            None => {
                tracing::trace!(?action, "ignoring action that changes nothing");
                return Ok(false);
            }
            Some(next) => next,
        };
        if let Err(err) = storage::save(&mut self.backend, self.question, &next) {
            tracing::warn!(?action, %err, question = %self.question, "failed saving comments");
            return Err(err);
        }
        self.comments = next;
        tracing::debug!(?action, question = %self.question, "committed comment action");
        Ok(true)
    }

    pub fn add(&mut self, content: &str) -> Result<Option<CommentId>, Error> {
        self.add_with_parent(content, None)
    }

    pub fn reply(&mut self, parent: CommentId, content: &str) -> Result<Option<CommentId>, Error> {
        self.add_with_parent(content, Some(parent))
    }

    fn add_with_parent(
        &mut self,
        content: &str,
        parent: Option<CommentId>,
    ) -> Result<Option<CommentId>, Error> {
        let action = Action::add(String::from(content), parent);
        Ok(self.perform(&action)?.then(|| action.target().clone()))
    }

    pub fn edit(&mut self, id: CommentId, content: &str) -> Result<bool, Error> {
        self.perform(&Action::Edit {
            id,
            content: String::from(content),
        })
    }

    /// Returns the number of comments removed, replies included
    pub fn delete(&mut self, id: CommentId) -> Result<usize, Error> {
        let before = self.comments.len();
        if !self.perform(&Action::Delete(id))? {
            return Ok(0);
        }
        let comments = &self.comments;
        self.votes.retain(|id| comments.iter().any(|c| c.id == *id));
        Ok(before - self.comments.len())
    }

    /// Returns the viewer's new vote on the comment, or None if it does not exist
    pub fn vote(&mut self, id: CommentId, dir: VoteDirection) -> Result<Option<VoteState>, Error> {
        let (next, delta) = self.votes.preview(&id, dir);
        let action = Action::Vote {
            id: id.clone(),
            delta,
        };
        if !self.perform(&action)? {
            return Ok(None);
        }
        self.votes.set(id, next);
        Ok(Some(next))
    }
}
