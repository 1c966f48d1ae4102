use std::collections::HashMap;

use crate::api::{Comment, CommentId, QuestionId};

/// Replies are still stored and shown below this depth, but cannot be replied to
pub const MAX_REPLY_DEPTH: usize = 4;

/// Top-level comments have depth 0
pub fn can_reply(depth: usize) -> bool {
    depth < MAX_REPLY_DEPTH
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.replies.iter().map(|r| r.count()).sum::<usize>()
    }

    pub fn find<'a>(forest: &'a [CommentNode], id: &CommentId) -> Option<&'a CommentNode> {
        Walk::new(forest)
            .map(|(_, n)| n)
            .find(|n| n.comment.id == *id)
    }

    /// Pre-order traversal of `forest`, along with each node's depth
    pub fn walk(forest: &[CommentNode]) -> Walk<'_> {
        Walk::new(forest)
    }
}

pub struct Walk<'a> {
    stack: Vec<(usize, &'a CommentNode)>,
}

impl<'a> Walk<'a> {
    fn new(forest: &'a [CommentNode]) -> Walk<'a> {
        Walk {
            stack: forest.iter().rev().map(|n| (0, n)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a CommentNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.replies.iter().rev().map(|r| (depth + 1, r)));
        Some((depth, node))
    }
}

/// Rebuilds the reply forest of `question` from the flat collection.
///
/// Siblings keep their order in `comments`. Comments whose parent is missing
/// are not reachable from any root, and thus left out.
pub fn build_tree(comments: &[Comment], question: QuestionId) -> Vec<CommentNode> {
    let mut children = HashMap::<Option<&CommentId>, Vec<usize>>::new();
    for (idx, c) in comments.iter().enumerate() {
        if c.question_id == question {
            children.entry(c.parent_id.as_ref()).or_default().push(idx);
        }
    }
    let forest = build_level(comments, &children, None);
    tracing::trace!(
        %question,
        roots = forest.len(),
        total = comments.len(),
        "rebuilt comment tree"
    );
    forest
}

fn build_level<'a>(
    comments: &'a [Comment],
    children: &HashMap<Option<&'a CommentId>, Vec<usize>>,
    parent: Option<&'a CommentId>,
) -> Vec<CommentNode> {
    let Some(idxs) = children.get(&parent) else {
        return Vec::new();
    };
    idxs.iter()
        .map(|&idx| CommentNode {
            comment: comments[idx].clone(),
            replies: build_level(comments, children, Some(&comments[idx].id)),
        })
        .collect()
}
