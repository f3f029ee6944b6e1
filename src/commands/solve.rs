//! Secret solving command
//!
//! Breaks a specific secret and records the path the solver took.

use crate::core::DigitSequence;
use crate::game::GameError;
use crate::solver::{GuessRecord, SolveLoop, Solver, StrategyType};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub strategy: StrategyType,
    pub max_guesses: Option<usize>,
    /// Raised from outside to abandon the solve
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, strategy: StrategyType) -> Self {
        Self {
            secret,
            strategy,
            max_guesses: None,
            cancel: None,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub secret: DigitSequence,
    pub strategy: StrategyType,
    pub guesses: Vec<GuessStep>,
    /// Misses before the winning guess
    pub attempts: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub record: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Spawn a watchdog that raises the returned flag once `timeout` elapses
#[must_use]
pub fn cancel_after(timeout: Duration) -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let watchdog = Arc::clone(&flag);
    thread::spawn(move || {
        thread::sleep(timeout);
        watchdog.store(true, Ordering::Relaxed);
    });
    flag
}

/// Solve a specific secret with the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid distinct-digit sequence
/// - `max_guesses` guesses were made without finding the secret
/// - The cancel flag was raised
/// - The candidate pool runs dry before the secret is found
pub fn solve_secret<R: Rng + ?Sized>(
    config: &SolveConfig,
    rng: &mut R,
) -> Result<SolveResult, GameError> {
    let secret = DigitSequence::new(&config.secret)?;

    let mut solver = Solver::new(config.strategy);
    if let Some(limit) = config.max_guesses {
        solver = solver.with_guess_limit(limit);
    }
    if let Some(flag) = &config.cancel {
        solver = solver.with_cancel_flag(Arc::clone(flag));
    }

    let mut run = SolveLoop::new(solver.strategy(), secret);
    let mut guesses = Vec::new();

    // Pool size before the draw, so the drawn guess is counted
    let mut candidates_before = run.pool().len();
    while let Some(record) = solver.step(&mut run, rng)? {
        guesses.push(GuessStep {
            record,
            candidates_before,
            candidates_after: run.pool().len(),
        });
        candidates_before = run.pool().len();
    }

    Ok(SolveResult {
        secret,
        strategy: config.strategy,
        guesses,
        attempts: run.attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolveError, StrongStrategy, WeakStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(21)
    }

    #[test]
    fn solve_secret_succeeds() {
        let config = SolveConfig::new("4271".to_string(), StrategyType::Strong(StrongStrategy));
        let result = solve_secret(&config, &mut rng()).unwrap();

        assert_eq!(result.guesses.len(), result.attempts + 1);
        assert_eq!(result.guesses.last().unwrap().record.guess, result.secret);
    }

    #[test]
    fn solve_records_history() {
        let config = SolveConfig::new("98765".to_string(), StrategyType::Weak(WeakStrategy));
        let result = solve_secret(&config, &mut rng()).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, 30240);
        for step in &result.guesses {
            assert!(step.candidates_after < step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("1123".to_string(), StrategyType::default());
        let result = solve_secret(&config, &mut rng());
        assert!(matches!(result, Err(GameError::Digits(_))));
    }

    #[test]
    fn solve_reports_guess_limit() {
        let mut config = SolveConfig::new("0123456789".to_string(), StrategyType::default());
        config.max_guesses = Some(1);

        let result = solve_secret(&config, &mut rng());
        assert!(matches!(
            result,
            Err(GameError::Solve(SolveError::GuessLimit(1)))
        ));
    }

    #[test]
    fn generous_limit_still_solves() {
        let mut config = SolveConfig::new("4271".to_string(), StrategyType::default());
        config.max_guesses = Some(100);
        assert!(solve_secret(&config, &mut rng()).is_ok());
    }

    #[test]
    fn raised_cancel_flag_stops_solve() {
        let mut config = SolveConfig::new("4271".to_string(), StrategyType::default());
        config.cancel = Some(Arc::new(AtomicBool::new(true)));

        let result = solve_secret(&config, &mut rng());
        assert!(matches!(
            result,
            Err(GameError::Solve(SolveError::Cancelled { attempts: 0 }))
        ));
    }

    #[test]
    fn cancel_after_raises_flag() {
        let flag = cancel_after(Duration::from_millis(1));
        for _ in 0..200 {
            if flag.load(Ordering::Relaxed) {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("watchdog never raised the flag");
    }
}
