//! Pending direction changes, each tagged with the number of ticks since it
//! was issued.
//!
//! A turn with age `n` is due at body index `n`: the head turns on the tick
//! the turn is issued, the first follower one tick later, and so on. The
//! queue only records *when* a segment turns; the head reads the snake's live
//! direction and followers copy the segment ahead of them.

use std::collections::BTreeMap;

/// Monotonic identifier of a queued turn
pub type TurnId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnQueue {
    ages: BTreeMap<TurnId, usize>,
    next_id: TurnId,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new turn at age 0 and return its id
    pub fn enqueue(&mut self) -> TurnId {
        let id = self.next_id;
        self.ages.insert(id, 0);
        self.next_id += 1;
        id
    }

    /// Whether any pending turn is due at body index `idx` this tick
    pub fn is_due(&self, idx: usize) -> bool {
        self.ages.values().any(|&age| age == idx)
    }

    /// Age every turn by one tick and forget those that ran past the tail.
    ///
    /// Returns the number of turns dropped.
    pub fn advance(&mut self, body_len: usize) -> usize {
        let before = self.ages.len();
        self.ages.retain(|_, age| {
            *age += 1;
            *age <= body_len
        });
        before - self.ages.len()
    }

    pub fn age(&self, id: TurnId) -> Option<usize> {
        self.ages.get(&id).copied()
    }

    pub fn next_id(&self) -> TurnId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_assigns_monotonic_ids() {
        let mut queue = TurnQueue::new();
        assert_eq!(queue.enqueue(), 0);
        assert_eq!(queue.enqueue(), 1);
        assert_eq!(queue.next_id(), 2);
        assert_eq!(queue.age(0), Some(0));
        assert_eq!(queue.age(1), Some(0));
    }

    #[test]
    fn test_due_index_follows_age() {
        let mut queue = TurnQueue::new();
        queue.enqueue();
        assert!(queue.is_due(0));
        assert!(!queue.is_due(1));

        queue.advance(3);
        assert!(!queue.is_due(0));
        assert!(queue.is_due(1));
    }

    #[test]
    fn test_turns_age_independently() {
        let mut queue = TurnQueue::new();
        let first = queue.enqueue();
        queue.advance(5);
        let second = queue.enqueue();
        queue.advance(5);

        assert_eq!(queue.age(first), Some(2));
        assert_eq!(queue.age(second), Some(1));
        assert!(queue.is_due(1) && queue.is_due(2));
    }

    #[test]
    fn test_turn_dropped_once_age_exceeds_length() {
        let mut queue = TurnQueue::new();
        queue.enqueue();

        assert_eq!(queue.advance(1), 0);
        assert_eq!(queue.age(0), Some(1));

        assert_eq!(queue.advance(1), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_drain() {
        let mut queue = TurnQueue::new();
        queue.enqueue();
        queue.advance(0);
        assert!(queue.is_empty());
        assert_eq!(queue.enqueue(), 1);
    }
}
