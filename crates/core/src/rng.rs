//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer used in modern falling-block games.
//! Each bag holds one of each piece kind, shuffled with an unbiased Fisher-Yates pass.
//! Bags are appended to a pending buffer and dealt from its head.
//!
//! The buffer always holds at least one piece once [`PieceQueue::draw`] returns: when a draw
//! takes the last pending piece, the next bag is shuffled in immediately. Callers can therefore
//! peek at the upcoming piece without forcing a refill first.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{PieceKind, BAG_SIZE};

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Pending draws, head first
    pending: VecDeque<PieceKind>,
    /// RNG for shuffling
    rng: StdRng,
    /// Number of bags shuffled so far
    bags_dealt: u64,
}

impl PieceQueue {
    /// Create a new piece queue.
    ///
    /// With `Some(seed)` the draw sequence is fully reproducible; `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut queue = Self {
            pending: VecDeque::with_capacity(BAG_SIZE * 2),
            rng,
            bags_dealt: 0,
        };
        queue.refill_bag();
        queue
    }

    /// Append a freshly shuffled bag to the pending buffer
    fn refill_bag(&mut self) {
        let mut bag = PieceKind::ALL;
        bag.shuffle(&mut self.rng);
        self.pending.extend(bag);
        self.bags_dealt += 1;
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(piece) = self.pending.pop_front() {
                if self.pending.is_empty() {
                    self.refill_bag();
                }
                return piece;
            }
            self.refill_bag();
        }
    }

    /// Peek at the next `count` pieces without consuming them.
    ///
    /// Shuffles in as many bags as needed; the result matches the next `count` draws.
    pub fn peek(&mut self, count: usize) -> Vec<PieceKind> {
        while self.pending.len() < count {
            self.refill_bag();
        }
        self.pending.iter().take(count).copied().collect()
    }

    /// Peek at the head of the queue
    pub fn peek_next(&self) -> Option<PieceKind> {
        self.pending.front().copied()
    }

    /// Pieces already shuffled and waiting, head first
    pub fn pending(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pending.iter().copied()
    }

    /// Number of pieces already shuffled and waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of bags shuffled since construction
    pub fn bags_dealt(&self) -> u64 {
        self.bags_dealt
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_bag(window: &[PieceKind]) {
        assert_eq!(window.len(), BAG_SIZE);
        for kind in PieceKind::ALL {
            assert_eq!(
                window.iter().filter(|&&k| k == kind).count(),
                1,
                "{:?} should appear exactly once in {:?}",
                kind,
                window
            );
        }
    }

    #[test]
    fn test_queue_deterministic() {
        let mut q1 = PieceQueue::new(Some(12345));
        let mut q2 = PieceQueue::new(Some(12345));

        for _ in 0..100 {
            assert_eq!(q1.draw(), q2.draw());
        }
    }

    #[test]
    fn test_queue_initial() {
        let queue = PieceQueue::new(Some(1));

        assert!(queue.peek_next().is_some());
        assert_eq!(queue.len(), BAG_SIZE);
        assert_eq!(queue.bags_dealt(), 1);
    }

    #[test]
    fn test_queue_draws_all_seven() {
        let mut queue = PieceQueue::new(Some(1));

        let drawn: Vec<_> = (0..BAG_SIZE).map(|_| queue.draw()).collect();
        assert_is_bag(&drawn);
    }

    #[test]
    fn test_queue_never_empty_after_draw() {
        let mut queue = PieceQueue::new(Some(9));

        for _ in 0..50 {
            queue.draw();
            assert!(!queue.is_empty());
        }
    }

    #[test]
    fn test_queue_refills_when_last_piece_drawn() {
        let mut queue = PieceQueue::new(Some(3));

        for _ in 0..BAG_SIZE - 1 {
            queue.draw();
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.bags_dealt(), 1);

        // Taking the last piece shuffles the next bag in right away.
        queue.draw();
        assert_eq!(queue.len(), BAG_SIZE);
        assert_eq!(queue.bags_dealt(), 2);
    }

    #[test]
    fn test_queue_peek_matches_draws() {
        let mut queue = PieceQueue::new(Some(1));

        let peeked = queue.peek(16);
        assert_eq!(peeked.len(), 16);
        assert!(queue.len() >= 16);

        let drawn: Vec<_> = (0..16).map(|_| queue.draw()).collect();
        assert_eq!(peeked, drawn);
    }

    #[test]
    fn test_queue_peek_does_not_consume() {
        let mut queue = PieceQueue::new(Some(5));

        let first = queue.peek(3);
        let second = queue.peek(3);
        assert_eq!(first, second);
        assert_eq!(queue.peek_next(), Some(first[0]));
        assert_eq!(queue.pending().next(), Some(first[0]));
    }

    #[test]
    fn test_queue_peek_zero() {
        let mut queue = PieceQueue::new(Some(5));
        assert!(queue.peek(0).is_empty());
        assert_eq!(queue.len(), BAG_SIZE);
    }

    #[test]
    fn test_unseeded_queue_still_deals_bags() {
        let mut queue = PieceQueue::default();
        let drawn: Vec<_> = (0..BAG_SIZE).map(|_| queue.draw()).collect();
        assert_is_bag(&drawn);
    }
}
