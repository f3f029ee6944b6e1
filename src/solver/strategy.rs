//! Elimination strategies
//!
//! Defines the Strategy trait and the two concrete pool filters.

use super::CandidatePool;
use crate::core::{Answer, DigitSequence};
use std::fmt;

/// A rule for pruning the pool after a guess that was not a full match
///
/// Implementations must only remove candidates that could not have produced
/// `answer` for `guess`; the secret always survives.
pub trait Strategy {
    /// Remove candidates inconsistent with `guess` having scored `answer`
    fn eliminate(&self, pool: &mut CandidatePool, guess: &DigitSequence, answer: Answer);

    /// Short identifier for display
    fn name(&self) -> &'static str;
}

/// Enum wrapper for both strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Ordered and unordered filters applied separately
    Weak(WeakStrategy),
    /// Exact bulls-and-cows match
    Strong(StrongStrategy),
}

impl Strategy for StrategyType {
    fn eliminate(&self, pool: &mut CandidatePool, guess: &DigitSequence, answer: Answer) {
        match self {
            Self::Weak(s) => s.eliminate(pool, guess, answer),
            Self::Strong(s) => s.eliminate(pool, guess, answer),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Weak(s) => s.name(),
            Self::Strong(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "weak" / "suboptimal", "strong" / "optimal".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "weak" | "suboptimal" => Some(Self::Weak(WeakStrategy)),
            "strong" | "optimal" => Some(Self::Strong(StrongStrategy)),
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Strong(StrongStrategy)
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-filter strategy
///
/// 1. Ordered: keep candidates with exactly `bulls` positional matches.
/// 2. Unordered: keep candidates sharing exactly `bulls + cows` digits.
///
/// Each filter is skipped when its count is zero, so a `0 bulls` or
/// `0 bulls 0 cows` answer prunes less than it could. The strong strategy
/// is the one without this gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeakStrategy;

impl WeakStrategy {
    /// Returns the number of candidates removed
    pub fn eliminate_ordered(pool: &mut CandidatePool, guess: &DigitSequence, bulls: usize) -> usize {
        if bulls == 0 {
            return 0;
        }
        pool.retain(|candidate| candidate.positional_matches(guess) == bulls)
    }

    /// Returns the number of candidates removed
    pub fn eliminate_unordered(
        pool: &mut CandidatePool,
        guess: &DigitSequence,
        shared: usize,
    ) -> usize {
        if shared == 0 {
            return 0;
        }
        pool.retain(|candidate| candidate.common_digits(guess) == shared)
    }
}

impl Strategy for WeakStrategy {
    fn eliminate(&self, pool: &mut CandidatePool, guess: &DigitSequence, answer: Answer) {
        Self::eliminate_ordered(pool, guess, answer.bulls);
        Self::eliminate_unordered(pool, guess, answer.total());
    }

    fn name(&self) -> &'static str {
        "weak"
    }
}

/// Combined strategy
///
/// Keeps exactly the candidates `c` with `score(guess, c) == answer`,
/// including for `0 bulls 0 cows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrongStrategy;

impl Strategy for StrongStrategy {
    fn eliminate(&self, pool: &mut CandidatePool, guess: &DigitSequence, answer: Answer) {
        pool.retain(|candidate| Answer::score(guess, candidate) == answer);
    }

    fn name(&self) -> &'static str {
        "strong"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::universe;

    fn seq(s: &str) -> DigitSequence {
        DigitSequence::new(s).unwrap()
    }

    /// Apply `strategy` for `guess` against `secret` on a fresh universe
    fn pruned<S: Strategy>(strategy: &S, secret: &str, guess: &str) -> CandidatePool {
        let (secret, guess) = (seq(secret), seq(guess));
        let mut pool = CandidatePool::universe(secret.len());
        strategy.eliminate(&mut pool, &guess, Answer::score(&secret, &guess));
        pool
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(
            StrategyType::from_name("weak"),
            Some(StrategyType::Weak(WeakStrategy))
        );
        assert_eq!(
            StrategyType::from_name("Optimal"),
            Some(StrategyType::Strong(StrongStrategy))
        );
        assert_eq!(StrategyType::from_name("entropy"), None);
    }

    #[test]
    fn strategy_default_is_strong() {
        assert_eq!(StrategyType::default().name(), "strong");
        assert_eq!(StrategyType::Weak(WeakStrategy).to_string(), "weak");
    }

    #[test]
    fn strong_keeps_exactly_consistent_candidates() {
        let guess = seq("1234");
        let answer = Answer::new(1, 2);
        let pool = pruned(&StrongStrategy, "4271", "1234");

        let expected = universe::generate(4)
            .into_iter()
            .filter(|c| Answer::score(&guess, c) == answer)
            .count();
        assert_eq!(pool.len(), expected);
        assert!(pool.iter().all(|c| Answer::score(&guess, c) == answer));
        assert!(pool.contains(&seq("4271")));
    }

    #[test]
    fn strong_prunes_on_zero_answer() {
        let pool = pruned(&StrongStrategy, "5678", "0123");
        // Only sequences drawn from 4..=9 remain: 6 × 5 × 4 × 3
        assert_eq!(pool.len(), 360);
        assert!(pool.iter().all(|c| c.common_digits(&seq("0123")) == 0));
    }

    #[test]
    fn weak_skips_filters_on_zero_answer() {
        let pool = pruned(&WeakStrategy, "5678", "0123");
        assert_eq!(pool.len(), universe::universe_size(4));
    }

    #[test]
    fn weak_skips_ordered_filter_on_zero_bulls() {
        let guess = seq("0123");
        // 0 bulls, 4 cows: only the unordered filter runs
        let pool = pruned(&WeakStrategy, "3210", "0123");
        assert_eq!(pool.len(), 24); // Every permutation of 0,1,2,3
        assert!(pool.contains(&guess));
        assert!(pool.contains(&seq("3210")));
    }

    #[test]
    fn weak_matches_strong_when_both_filters_run() {
        // With bulls > 0, exact bulls plus exact shared digits pins down cows
        let weak = pruned(&WeakStrategy, "4271", "1234");
        let strong = pruned(&StrongStrategy, "4271", "1234");
        assert_eq!(weak.len(), strong.len());
    }

    #[test]
    fn weak_filters_report_removed() {
        let guess = seq("0123");
        let mut pool = CandidatePool::universe(4);
        let total = pool.len();

        assert_eq!(WeakStrategy::eliminate_ordered(&mut pool, &guess, 0), 0);
        let removed = WeakStrategy::eliminate_ordered(&mut pool, &guess, 4);
        assert_eq!(removed, total - 1);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn strong_is_at_least_as_aggressive_as_weak() {
        let secrets = ["4271", "0123", "9876", "5012"];
        let guesses = ["1234", "3210", "5678", "0987", "4567"];
        for secret in secrets {
            for guess in guesses {
                let weak = pruned(&WeakStrategy, secret, guess);
                let strong = pruned(&StrongStrategy, secret, guess);
                assert!(strong.len() <= weak.len(), "{secret} / {guess}");
                assert!(strong.iter().all(|c| weak.contains(c)));
                assert!(weak.contains(&seq(secret)));
                assert!(strong.contains(&seq(secret)));
            }
        }
    }
}
