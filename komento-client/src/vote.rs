use std::collections::HashMap;

use crate::api::{CommentId, VoteDirection, VoteState};

/// Votes cast by the current viewer during this session, never persisted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VoteTracker {
    states: HashMap<CommentId, VoteState>,
}

impl VoteTracker {
    pub fn new() -> VoteTracker {
        VoteTracker::default()
    }

    pub fn get(&self, id: &CommentId) -> VoteState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Computes the state a vote would lead to without recording it
    pub fn preview(&self, id: &CommentId, dir: VoteDirection) -> (VoteState, i64) {
        self.get(id).toggle(dir)
    }

    pub fn set(&mut self, id: CommentId, state: VoteState) {
        match state {
            VoteState::None => self.states.remove(&id),
            _ => self.states.insert(id, state),
        };
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&CommentId) -> bool) {
        self.states.retain(|id, _| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(t: &mut VoteTracker, id: &CommentId, dir: VoteDirection) -> i64 {
        let (next, delta) = t.preview(id, dir);
        t.set(id.clone(), next);
        delta
    }

    #[test]
    fn toggling_the_same_direction_retracts() {
        let id = CommentId::new();
        let mut t = VoteTracker::new();
        assert_eq!(vote(&mut t, &id, VoteDirection::Up), 1);
        assert_eq!(t.get(&id), VoteState::Up);
        assert_eq!(vote(&mut t, &id, VoteDirection::Up), -1);
        assert_eq!(t.get(&id), VoteState::None);
        // Retracted votes leave no entry behind
        assert_eq!(t, VoteTracker::new());
    }

    #[test]
    fn switching_direction_moves_two() {
        let id = CommentId::new();
        let mut t = VoteTracker::new();
        assert_eq!(vote(&mut t, &id, VoteDirection::Up), 1);
        assert_eq!(vote(&mut t, &id, VoteDirection::Down), -2);
        assert_eq!(t.get(&id), VoteState::Down);
        assert_eq!(vote(&mut t, &id, VoteDirection::Up), 2);
        assert_eq!(t.get(&id), VoteState::Up);
    }

    #[test]
    fn states_are_per_comment() {
        let (a, b) = (CommentId::new(), CommentId::new());
        let mut t = VoteTracker::new();
        vote(&mut t, &a, VoteDirection::Down);
        assert_eq!(t.get(&a), VoteState::Down);
        assert_eq!(t.get(&b), VoteState::None);
        assert_eq!(t.preview(&b, VoteDirection::Down), (VoteState::Down, -1));
        assert_eq!(t.get(&b), VoteState::None);
        t.retain(|id| *id != a);
        assert_eq!(t, VoteTracker::new());
    }
}
