//! Candidate pool
//!
//! The set of sequences still consistent with all feedback so far. Order is
//! irrelevant, so draws use `swap_remove` and filtering is an in-place retain.

use super::universe;
use crate::core::DigitSequence;
use rand::Rng;

/// Remaining candidates for one solve
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<DigitSequence>,
}

impl CandidatePool {
    /// Seed the pool with the full universe for `length`
    #[must_use]
    pub fn universe(length: usize) -> Self {
        Self {
            candidates: universe::generate(length),
        }
    }

    /// Build a pool from an explicit candidate list
    #[must_use]
    pub const fn from_candidates(candidates: Vec<DigitSequence>) -> Self {
        Self { candidates }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, sequence: &DigitSequence) -> bool {
        self.candidates.contains(sequence)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DigitSequence> {
        self.candidates.iter()
    }

    /// Remove and return a uniformly random candidate
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DigitSequence> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.candidates.len());
        Some(self.candidates.swap_remove(index))
    }

    /// Keep only candidates satisfying `keep`; returns how many were removed
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&DigitSequence) -> bool,
    {
        let before = self.candidates.len();
        self.candidates.retain(keep);
        before - self.candidates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn universe_pool_size() {
        assert_eq!(CandidatePool::universe(3).len(), 720);
        assert!(CandidatePool::universe(0).is_empty());
    }

    #[test]
    fn draw_removes_candidate() {
        let mut pool = CandidatePool::universe(2);
        let mut rng = StdRng::seed_from_u64(3);

        let drawn = pool.draw(&mut rng).unwrap();
        assert_eq!(pool.len(), 89);
        assert!(!pool.contains(&drawn));
    }

    #[test]
    fn draw_exhausts_pool() {
        let mut pool = CandidatePool::universe(1);
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = Vec::new();
        while let Some(seq) = pool.draw(&mut rng) {
            seen.push(seq.digit_at(0));
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<u8>>());
        assert!(pool.draw(&mut rng).is_none());
    }

    #[test]
    fn retain_reports_removed_count() {
        let mut pool = CandidatePool::universe(2);
        let removed = pool.retain(|seq| seq.digit_at(0) == 5);
        assert_eq!(removed, 81);
        assert_eq!(pool.len(), 9);
        assert!(pool.iter().all(|seq| seq.digit_at(0) == 5));
    }

    #[test]
    fn from_candidates_keeps_entries() {
        let a = DigitSequence::new("12").unwrap();
        let b = DigitSequence::new("34").unwrap();
        let pool = CandidatePool::from_candidates(vec![a, b]);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains(&a) && pool.contains(&b));
    }
}
