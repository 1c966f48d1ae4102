use std::collections::{HashMap, HashSet};

use crate::api::{Action, Comment, CommentId, QuestionId, Time};

/// Computes the flat collection resulting from `action` on `question`'s comments.
///
/// Returns `None` when the action would not change anything: blank content,
/// unknown target or parent, or a null vote delta. Comments are never reordered,
/// a new comment is always appended at the end.
pub fn apply(
    comments: &[Comment],
    question: QuestionId,
    action: &Action,
    now: Time,
) -> Option<Vec<Comment>> {
    match action {
        Action::Add {
            id,
            content,
            parent_id,
        } => {
            let content = content.trim();
            if content.is_empty() {
                return None;
            }
            if comments.iter().any(|c| c.id == *id) {
                tracing::warn!(?id, "refusing to add a comment with an already-used id");
                return None;
            }
            if let Some(parent) = parent_id {
                position(comments, question, parent)?;
            }
            let mut res = Vec::with_capacity(comments.len() + 1);
            res.extend_from_slice(comments);
            res.push(Comment::new(
                id.clone(),
                question,
                parent_id.clone(),
                String::from(content),
                now,
            ));
            Some(res)
        }
        Action::Edit { id, content } => {
            let content = content.trim();
            if content.is_empty() {
                return None;
            }
            let idx = position(comments, question, id)?;
            let mut res = comments.to_vec();
            res[idx].content = String::from(content);
            res[idx].updated_at = now;
            Some(res)
        }
        Action::Delete(id) => {
            let idx = position(comments, question, id)?;
            let doomed = subtree(comments, question, &comments[idx].id);
            Some(
                comments
                    .iter()
                    .filter(|c| !doomed.contains(&c.id))
                    .cloned()
                    .collect(),
            )
        }
        Action::Vote { id, delta } => {
            if *delta == 0 {
                return None;
            }
            let idx = position(comments, question, id)?;
            let mut res = comments.to_vec();
            res[idx].votes = res[idx].votes.saturating_add(*delta);
            Some(res)
        }
    }
}

fn position(comments: &[Comment], question: QuestionId, id: &CommentId) -> Option<usize> {
    comments
        .iter()
        .position(|c| c.id == *id && c.question_id == question)
}

/// `root` and every comment whose parent chain leads back to it
fn subtree<'a>(
    comments: &'a [Comment],
    question: QuestionId,
    root: &'a CommentId,
) -> HashSet<&'a CommentId> {
    let mut children = HashMap::<&CommentId, Vec<&CommentId>>::new();
    for c in comments.iter().filter(|c| c.question_id == question) {
        if let Some(parent) = &c.parent_id {
            children.entry(parent).or_default().push(&c.id);
        }
    }
    let mut res = HashSet::new();
    let mut todo = vec![root];
    while let Some(id) = todo.pop() {
        if res.insert(id) {
            if let Some(c) = children.get(&id) {
                todo.extend(c.iter().copied());
            }
        }
    }
    res
}
