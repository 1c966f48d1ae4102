use std::collections::HashSet;

use bolero::generator::TypeGenerator;

use crate::{
    api::{Comment, QuestionId, SortOrder, VoteDirection},
    decode, encode, CommentNode, CommentStore, MemoryBackend,
};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    Add {
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        content: String,
        /// Index into the current comments, modulo their number
        parent: Option<u8>,
    },
    Edit {
        target: u8,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        content: String,
    },
    Delete(u8),
    Vote {
        target: u8,
        up: bool,
    },
}

fn pick(comments: &[Comment], idx: u8) -> Option<&Comment> {
    match comments.len() {
        0 => None,
        n => Some(&comments[idx as usize % n]),
    }
}

fn run(s: &mut CommentStore<MemoryBackend>, op: &FuzzOp) {
    match op {
        FuzzOp::Add { content, parent } => {
            let parent = parent
                .and_then(|p| pick(s.comments(), p))
                .map(|c| c.id.clone());
            let before = s.len();
            let res = match parent.clone() {
                None => s.add(content),
                Some(p) => s.reply(p, content),
            }
            .expect("saving to unbounded memory");
            match res {
                None => assert!(content.trim().is_empty()),
                Some(id) => {
                    assert_eq!(s.len(), before + 1);
                    let c = s.get(&id).expect("added comment is stored");
                    assert_eq!(c.created_at, c.updated_at);
                    assert_eq!(c.parent_id, parent);
                }
            }
        }
        FuzzOp::Edit { target, content } => {
            let Some(c) = pick(s.comments(), *target).cloned() else {
                return;
            };
            let changed = s.edit(c.id.clone(), content).expect("saving to unbounded memory");
            assert_eq!(changed, !content.trim().is_empty());
            let after = s.get(&c.id).expect("edited comment is still stored");
            assert_eq!(after.created_at, c.created_at);
            assert_eq!(after.votes, c.votes);
            assert_eq!(after.parent_id, c.parent_id);
        }
        FuzzOp::Delete(target) => {
            let Some(c) = pick(s.comments(), *target).cloned() else {
                return;
            };
            let expected = CommentNode::find(&s.tree(SortOrder::Oldest), &c.id)
                .expect("every stored comment is in the tree")
                .count();
            assert_eq!(s.delete(c.id.clone()), Ok(expected));
            assert!(s.get(&c.id).is_none());
        }
        FuzzOp::Vote { target, up } => {
            let Some(c) = pick(s.comments(), *target).cloned() else {
                return;
            };
            let dir = if *up { VoteDirection::Up } else { VoteDirection::Down };
            let before = s.vote_state(&c.id);
            let after = s
                .vote(c.id.clone(), dir)
                .expect("saving to unbounded memory")
                .expect("voted comment exists");
            assert_eq!(
                s.get(&c.id).map(|c| c.votes),
                Some(c.votes + after.weight() - before.weight())
            );
        }
    }
}

fn check_invariants(s: &CommentStore<MemoryBackend>) {
    let comments = s.comments();
    let ids = comments.iter().map(|c| &c.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), comments.len(), "comment ids are unique");
    for c in comments {
        if let Some(p) = &c.parent_id {
            assert!(ids.contains(p), "no reply outlives its parent");
        }
        assert!(c.created_at <= c.updated_at);
    }

    // Everything voted in this session started at zero
    let total = comments.iter().map(|c| c.votes).sum::<i64>();
    let net = comments
        .iter()
        .map(|c| s.vote_state(&c.id).weight())
        .sum::<i64>();
    assert_eq!(total, net);

    for order in SortOrder::ALL {
        let forest = s.tree(order);
        assert_eq!(CommentNode::walk(&forest).count(), comments.len());
        check_sorted(&forest, order);
    }

    assert_eq!(decode(&encode(comments).unwrap()).unwrap(), comments);
}

fn check_sorted(level: &[CommentNode], order: SortOrder) {
    for w in level.windows(2) {
        let (a, b) = (&w[0].comment, &w[1].comment);
        match order {
            SortOrder::Newest => assert!(a.created_at >= b.created_at),
            SortOrder::Oldest => assert!(a.created_at <= b.created_at),
            SortOrder::MostVoted => assert!(a.votes >= b.votes),
        }
    }
    for n in level {
        check_sorted(&n.replies, order);
    }
}

#[test]
fn random_sessions_keep_invariants() {
    bolero::check!()
        .with_type::<Vec<FuzzOp>>()
        .for_each(|ops| {
            let mut s = CommentStore::open(MemoryBackend::new(), QuestionId(1))
                .expect("opening empty store");
            for op in ops {
                run(&mut s, op);
                check_invariants(&s);
            }
            let reopened = CommentStore::open(s.backend().clone(), QuestionId(1))
                .expect("reopening store");
            assert_eq!(reopened.comments(), s.comments());
        })
}
