//! Benchmark commands
//!
//! Average attempts over many random secrets, for one strategy or both.

use crate::game::GameError;
use crate::solver::{
    BatchReport, Solver, StrategyComparison, StrategyType, compare_strategies,
    run_batch_with_progress,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Run a batch for one strategy, with a progress bar
///
/// # Errors
///
/// Returns an error for zero trials, a length outside 1..=10, or a failed solve.
pub fn run_benchmark<R: Rng + ?Sized>(
    strategy: StrategyType,
    length: usize,
    trials: usize,
    rng: &mut R,
) -> Result<BatchReport, GameError> {
    println!("🎯 Solving {trials} random {length}-digit secrets ({strategy})...");

    let pb = progress_bar(trials as u64);
    let solver = Solver::new(strategy);
    let report = run_batch_with_progress(&solver, length, trials, rng, || pb.inc(1));
    pb.finish_and_clear();

    Ok(report?)
}

/// Run both strategies over the same secrets
///
/// # Errors
///
/// See [`run_benchmark`].
pub fn run_comparison<R: Rng + ?Sized>(
    length: usize,
    trials: usize,
    rng: &mut R,
) -> Result<StrategyComparison, GameError> {
    println!("🎯 Comparing strategies on {trials} random {length}-digit secrets...");

    let pb = progress_bar(trials as u64 * 2);
    let comparison = compare_strategies(length, trials, rng, || pb.inc(1));
    pb.finish_and_clear();

    Ok(comparison?)
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveError, WeakStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let report =
            run_benchmark(StrategyType::Weak(WeakStrategy), 3, 20, &mut rng).unwrap();

        assert_eq!(report.trials, 20);
        assert_eq!(report.strategy, "weak");
        let distribution_sum: usize = report.distribution.values().sum();
        assert_eq!(distribution_sum, report.trials);
    }

    #[test]
    fn benchmark_zero_trials() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_benchmark(StrategyType::default(), 4, 0, &mut rng);
        assert!(matches!(result, Err(GameError::Solve(SolveError::NoTrials))));
    }

    #[test]
    fn comparison_uses_same_trial_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let comparison = run_comparison(3, 30, &mut rng).unwrap();
        assert_eq!(comparison.weak.trials, comparison.strong.trials);
        assert_eq!(comparison.weak.strategy, "weak");
        assert_eq!(comparison.strong.strategy, "strong");
    }
}
