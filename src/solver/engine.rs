//! Solve loop
//!
//! Draws random candidates, scores them against the secret and prunes the
//! pool until the secret itself is drawn.

use super::CandidatePool;
use super::strategy::Strategy;
use crate::core::{Answer, DigitSequence};
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Error type for solving and batch runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Secret length outside 1..=10
    InvalidLength(usize),
    /// Pool emptied before the secret was drawn
    PoolExhausted { attempts: usize },
    /// Cancellation flag raised mid-solve
    Cancelled { attempts: usize },
    /// Configured guess limit reached without finding the secret
    GuessLimit(usize),
    /// Batch requested with zero trials
    NoTrials,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Secret length must be between 1 and 10, got {len}")
            }
            Self::PoolExhausted { attempts } => write!(
                f,
                "Candidate pool exhausted after {attempts} attempts without finding the secret"
            ),
            Self::Cancelled { attempts } => write!(f, "Solve cancelled after {attempts} attempts"),
            Self::GuessLimit(limit) => write!(f, "Secret not found within {limit} guesses"),
            Self::NoTrials => write!(f, "Batch needs at least one trial"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Lifecycle of a single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Seeded,
    Guessing,
    Found,
}

/// One evaluated guess, as reported to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    /// 1-based position of this guess within the solve
    pub index: usize,
    pub guess: DigitSequence,
    pub answer: Answer,
}

/// Outcome of a completed solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub sequence: DigitSequence,
    /// Unsuccessful guesses before the winning one
    pub attempts: usize,
}

/// A single solve, advanced one guess at a time
///
/// Owns its pool exclusively; the pool is regenerated for every new loop.
pub struct SolveLoop<'a, S: Strategy + ?Sized> {
    strategy: &'a S,
    secret: DigitSequence,
    pool: CandidatePool,
    attempts: usize,
    guesses: usize,
    state: SolveState,
    found: Option<DigitSequence>,
}

impl<'a, S: Strategy + ?Sized> SolveLoop<'a, S> {
    /// Seed a loop with the full universe for the secret's length
    #[must_use]
    pub fn new(strategy: &'a S, secret: DigitSequence) -> Self {
        Self {
            strategy,
            secret,
            pool: CandidatePool::universe(secret.len()),
            attempts: 0,
            guesses: 0,
            state: SolveState::Seeded,
            found: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Total guesses made, including a winning one
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// The result, once the loop has reached `Found`
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        self.found.map(|sequence| Solution {
            sequence,
            attempts: self.attempts,
        })
    }

    /// Make one guess
    ///
    /// Returns `Ok(None)` if the secret was already found.
    ///
    /// # Errors
    /// Returns `SolveError::PoolExhausted` if no candidates remain.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<GuessRecord>, SolveError> {
        if self.state == SolveState::Found {
            return Ok(None);
        }
        self.state = SolveState::Guessing;

        let guess = self.pool.draw(rng).ok_or(SolveError::PoolExhausted {
            attempts: self.attempts,
        })?;
        let answer = Answer::score(&self.secret, &guess);
        self.guesses += 1;

        if answer.is_win(self.secret.len()) {
            self.state = SolveState::Found;
            self.found = Some(guess);
        } else {
            self.attempts += 1;
            self.strategy.eliminate(&mut self.pool, &guess, answer);
        }

        Ok(Some(GuessRecord {
            index: self.guesses,
            guess,
            answer,
        }))
    }
}

/// Bulls and Cows solver
///
/// Runs complete solves with a given elimination strategy.
#[derive(Debug, Clone, Default)]
pub struct Solver<S: Strategy> {
    strategy: S,
    guess_limit: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            guess_limit: None,
            cancel: None,
        }
    }

    /// Stop with `SolveError::GuessLimit` after `limit` guesses
    #[must_use]
    pub fn with_guess_limit(mut self, limit: usize) -> Self {
        self.guess_limit = Some(limit);
        self
    }

    /// Stop with `SolveError::Cancelled` once `flag` is set
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Solve for `secret`, reporting every guess to `on_guess`
    ///
    /// # Errors
    /// Returns `SolveError::PoolExhausted` if the pool empties (a strategy bug),
    /// or `Cancelled` / `GuessLimit` when those guards are configured.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::DigitSequence;
    /// use bulls_cows::solver::{Solver, StrongStrategy};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let secret = DigitSequence::new("4271").unwrap();
    /// let solver = Solver::new(StrongStrategy);
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let solution = solver.solve(&secret, &mut rng, |_| {}).unwrap();
    /// assert_eq!(solution.sequence, secret);
    /// ```
    pub fn solve<R, F>(
        &self,
        secret: &DigitSequence,
        rng: &mut R,
        mut on_guess: F,
    ) -> Result<Solution, SolveError>
    where
        R: Rng + ?Sized,
        F: FnMut(&GuessRecord),
    {
        let mut run = SolveLoop::new(&self.strategy, *secret);

        loop {
            if let Some(solution) = run.solution() {
                return Ok(solution);
            }
            if let Some(record) = self.step(&mut run, rng)? {
                on_guess(&record);
            }
        }
    }

    /// Advance `run` by one guess, honoring the cancel flag and guess limit
    ///
    /// Returns `Ok(None)` once the secret has been found.
    ///
    /// # Errors
    /// Returns `Cancelled` or `GuessLimit` before the guess is drawn, or the
    /// loop's own `PoolExhausted`.
    pub fn step<R: Rng + ?Sized>(
        &self,
        run: &mut SolveLoop<'_, S>,
        rng: &mut R,
    ) -> Result<Option<GuessRecord>, SolveError> {
        if run.state() == SolveState::Found {
            return Ok(None);
        }

        if let Some(flag) = &self.cancel
            && flag.load(Ordering::Relaxed)
        {
            return Err(SolveError::Cancelled {
                attempts: run.attempts(),
            });
        }

        if let Some(limit) = self.guess_limit
            && run.guesses() >= limit
        {
            return Err(SolveError::GuessLimit(limit));
        }

        run.step(rng)
    }
}
