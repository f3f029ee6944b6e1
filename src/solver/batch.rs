//! Batch runs
//!
//! Solves many random secrets and aggregates attempt counts. Trials run in
//! parallel; each one gets its own `StdRng` seeded from the caller's source,
//! so a fixed seed gives the same report regardless of scheduling.

use super::engine::{SolveError, Solver};
use super::strategy::{Strategy, StrategyType, StrongStrategy, WeakStrategy};
use super::universe::{random_secret, universe_size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub strategy: &'static str,
    pub length: usize,
    pub trials: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// attempts → number of trials
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

/// Both strategies run over identical trial seeds
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    pub weak: BatchReport,
    pub strong: BatchReport,
}

impl StrategyComparison {
    /// Average attempts saved by the strong strategy
    #[must_use]
    pub fn improvement(&self) -> f64 {
        self.weak.average_attempts - self.strong.average_attempts
    }
}

/// Solve `trials` random secrets of `length` and average the attempt counts
///
/// # Errors
/// Returns `SolveError::NoTrials` for zero trials, `InvalidLength` for a length
/// outside 1..=10, or the first error any individual solve hit.
///
/// # Examples
/// ```
/// use bulls_cows::solver::{Solver, StrongStrategy, run_batch};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let solver = Solver::new(StrongStrategy);
/// let report = run_batch(&solver, 3, 20, &mut StdRng::seed_from_u64(9)).unwrap();
/// assert_eq!(report.trials, 20);
/// ```
pub fn run_batch<S, R>(
    solver: &Solver<S>,
    length: usize,
    trials: usize,
    rng: &mut R,
) -> Result<BatchReport, SolveError>
where
    S: Strategy + Sync,
    R: Rng + ?Sized,
{
    run_batch_with_progress(solver, length, trials, rng, || {})
}

/// Same as [`run_batch`], calling `on_trial` after every completed trial
///
/// # Errors
/// See [`run_batch`].
pub fn run_batch_with_progress<S, R, P>(
    solver: &Solver<S>,
    length: usize,
    trials: usize,
    rng: &mut R,
    on_trial: P,
) -> Result<BatchReport, SolveError>
where
    S: Strategy + Sync,
    R: Rng + ?Sized,
    P: Fn() + Sync,
{
    if trials == 0 {
        return Err(SolveError::NoTrials);
    }
    if universe_size(length) == 0 {
        return Err(SolveError::InvalidLength(length));
    }

    let seeds: Vec<u64> = (0..trials).map(|_| rng.random()).collect();
    let start = Instant::now();

    let attempts = seeds
        .par_iter()
        .map(|&seed| -> Result<usize, SolveError> {
            let mut trial_rng = StdRng::seed_from_u64(seed);
            let secret = random_secret(length, &mut trial_rng)?;
            let solution = solver.solve(&secret, &mut trial_rng, |_| {})?;
            on_trial();
            Ok(solution.attempts)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarize(
        solver.strategy().name(),
        length,
        &attempts,
        start.elapsed(),
    ))
}

/// Run weak and strong batches over the same per-trial seeds
///
/// Both batches see the same secrets, so the difference in averages reflects
/// the strategies rather than the draw of secrets.
///
/// # Errors
/// See [`run_batch`].
pub fn compare_strategies<R, P>(
    length: usize,
    trials: usize,
    rng: &mut R,
    on_trial: P,
) -> Result<StrategyComparison, SolveError>
where
    R: Rng + ?Sized,
    P: Fn() + Sync,
{
    let base_seed: u64 = rng.random();

    let weak = run_batch_with_progress(
        &Solver::new(StrategyType::Weak(WeakStrategy)),
        length,
        trials,
        &mut StdRng::seed_from_u64(base_seed),
        &on_trial,
    )?;
    let strong = run_batch_with_progress(
        &Solver::new(StrategyType::Strong(StrongStrategy)),
        length,
        trials,
        &mut StdRng::seed_from_u64(base_seed),
        &on_trial,
    )?;

    Ok(StrategyComparison { weak, strong })
}

fn summarize(
    strategy: &'static str,
    length: usize,
    attempts: &[usize],
    duration: Duration,
) -> BatchReport {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &count in attempts {
        *distribution.entry(count).or_insert(0) += 1;
    }

    let total_attempts: usize = attempts.iter().sum();

    BatchReport {
        strategy,
        length,
        trials: attempts.len(),
        total_attempts,
        average_attempts: total_attempts as f64 / attempts.len() as f64,
        min_attempts: attempts.iter().copied().min().unwrap_or(0),
        max_attempts: attempts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
    }
}
