use std::cmp::Reverse;

use crate::{api::SortOrder, CommentNode};

pub trait OrderExt {
    fn sort(&self, forest: &mut [CommentNode]);
}

impl OrderExt for SortOrder {
    /// Sorts every level of the forest. The sort is stable, so comments with
    /// equal keys keep their insertion order.
    fn sort(&self, forest: &mut [CommentNode]) {
        match self {
            SortOrder::Newest => forest.sort_by_key(|n| Reverse(n.comment.created_at)),
            SortOrder::Oldest => forest.sort_by_key(|n| n.comment.created_at),
            SortOrder::MostVoted => forest.sort_by_key(|n| Reverse(n.comment.votes)),
        }
        for n in forest.iter_mut() {
            self.sort(&mut n.replies);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::{
        api::{Comment, CommentId, QuestionId},
        build_tree,
    };

    const Q: QuestionId = QuestionId(9);

    fn comment(content: &str, secs: i64, votes: i64, parent: Option<&Comment>) -> Comment {
        let mut c = Comment::new(
            CommentId::new(),
            Q,
            parent.map(|p| p.id.clone()),
            String::from(content),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs),
        );
        c.votes = votes;
        c
    }

    fn contents(forest: &[CommentNode]) -> Vec<&str> {
        forest.iter().map(|n| &n.comment.content as &str).collect()
    }

    fn sorted(comments: &[Comment], order: SortOrder) -> Vec<CommentNode> {
        let mut forest = build_tree(comments, Q);
        order.sort(&mut forest);
        forest
    }

    fn example() -> Vec<Comment> {
        let t1 = comment("t1", 1, 0, None);
        let t2 = comment("t2", 2, 5, None);
        let t3 = comment("t3", 3, -1, None);
        let r1 = comment("r1", 10, 1, Some(&t2));
        let r3 = comment("r3", 30, 3, Some(&t2));
        let r2 = comment("r2", 20, 2, Some(&t2));
        let r2a = comment("r2a", 21, 0, Some(&r2));
        let r2b = comment("r2b", 22, 9, Some(&r2));
        vec![t1, t2, t3, r1, r3, r2, r2a, r2b]
    }

    #[test]
    fn newest_first_at_every_level() {
        let forest = sorted(&example(), SortOrder::Newest);
        assert_eq!(contents(&forest), vec!["t3", "t2", "t1"]);
        assert_eq!(contents(&forest[1].replies), vec!["r3", "r2", "r1"]);
        assert_eq!(contents(&forest[1].replies[1].replies), vec!["r2b", "r2a"]);
    }

    #[test]
    fn oldest_first_at_every_level() {
        let forest = sorted(&example(), SortOrder::Oldest);
        assert_eq!(contents(&forest), vec!["t1", "t2", "t3"]);
        assert_eq!(contents(&forest[1].replies), vec!["r1", "r2", "r3"]);
        assert_eq!(contents(&forest[1].replies[1].replies), vec!["r2a", "r2b"]);
    }

    #[test]
    fn most_voted_first_at_every_level() {
        let forest = sorted(&example(), SortOrder::MostVoted);
        assert_eq!(contents(&forest), vec!["t2", "t1", "t3"]);
        assert_eq!(contents(&forest[0].replies), vec!["r3", "r2", "r1"]);
        assert_eq!(contents(&forest[0].replies[1].replies), vec!["r2b", "r2a"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let a = comment("a", 5, 2, None);
        let b = comment("b", 5, 2, None);
        let c = comment("c", 5, 2, None);
        let comments = vec![a, b, c];
        for order in SortOrder::ALL {
            assert_eq!(contents(&sorted(&comments, order)), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        for order in SortOrder::ALL {
            let once = sorted(&example(), order);
            let mut twice = once.clone();
            order.sort(&mut twice);
            assert_eq!(once, twice);
        }
    }
}
