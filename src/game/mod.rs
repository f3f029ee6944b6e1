//! Game session
//!
//! Holds the current secret and the random source. Used by the CLI and TUI
//! for both modes: a person guessing a generated secret, and the solver
//! breaking a secret the person supplied.

use crate::core::{Answer, DigitError, DigitSequence};
use crate::solver::{
    BatchReport, GuessRecord, Solution, SolveError, Solver, Strategy, random_secret, run_batch,
};
use rand::Rng;
use std::fmt;

/// Error type for game operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No secret has been set or generated yet
    NoSecret,
    /// Guess length differs from the secret's
    LengthMismatch { expected: usize, found: usize },
    Digits(DigitError),
    Solve(SolveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSecret => write!(f, "No secret yet - generate or set one first"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Guess has {found} digits, secret has {expected}")
            }
            Self::Digits(err) => write!(f, "{err}"),
            Self::Solve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Digits(err) => Some(err),
            Self::Solve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DigitError> for GameError {
    fn from(err: DigitError) -> Self {
        Self::Digits(err)
    }
}

impl From<SolveError> for GameError {
    fn from(err: SolveError) -> Self {
        Self::Solve(err)
    }
}

/// A Bulls and Cows session
pub struct Game<R: Rng> {
    secret: Option<DigitSequence>,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub const fn new(rng: R) -> Self {
        Self { secret: None, rng }
    }

    /// Replace the secret with one supplied by the caller
    pub fn set_secret(&mut self, secret: DigitSequence) {
        self.secret = Some(secret);
    }

    /// Replace the secret with a random one of `length` digits
    ///
    /// On an invalid length the old secret is cleared and nothing is guessed
    /// until a new one is set.
    ///
    /// # Errors
    /// Returns `GameError::Solve(SolveError::InvalidLength)` if `length` is outside 1..=10.
    pub fn generate_secret(&mut self, length: usize) -> Result<DigitSequence, GameError> {
        self.secret = None;
        let secret = random_secret(length, &mut self.rng)?;
        self.secret = Some(secret);
        Ok(secret)
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&DigitSequence> {
        self.secret.as_ref()
    }

    /// Length of the current secret, or 0 if none is set
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.secret.map_or(0, |s| s.len())
    }

    /// Score a guess against the current secret
    ///
    /// No candidate pool is involved; this is the person-guesses mode.
    ///
    /// # Errors
    /// Returns `GameError::NoSecret` or `GameError::LengthMismatch`.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Answer, DigitSequence};
    /// use bulls_cows::game::Game;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut game = Game::new(StdRng::seed_from_u64(0));
    /// game.set_secret(DigitSequence::new("4271").unwrap());
    ///
    /// let answer = game.propose(&DigitSequence::new("1234").unwrap()).unwrap();
    /// assert_eq!(answer, Answer::new(1, 2));
    /// ```
    pub fn propose(&self, guess: &DigitSequence) -> Result<Answer, GameError> {
        let secret = self.secret.as_ref().ok_or(GameError::NoSecret)?;
        if secret.len() != guess.len() {
            return Err(GameError::LengthMismatch {
                expected: secret.len(),
                found: guess.len(),
            });
        }
        Ok(Answer::score(secret, guess))
    }

    /// Let the solver find the current secret
    ///
    /// # Errors
    /// Returns `GameError::NoSecret`, or the solver's error.
    pub fn solve<S, F>(&mut self, solver: &Solver<S>, on_guess: F) -> Result<Solution, GameError>
    where
        S: Strategy,
        F: FnMut(&GuessRecord),
    {
        let secret = self.secret.ok_or(GameError::NoSecret)?;
        Ok(solver.solve(&secret, &mut self.rng, on_guess)?)
    }

    /// Average attempts over `trials` fresh random secrets
    ///
    /// The current secret is left untouched.
    ///
    /// # Errors
    /// Returns the batch error, wrapped.
    pub fn run_batch<S>(
        &mut self,
        solver: &Solver<S>,
        length: usize,
        trials: usize,
    ) -> Result<BatchReport, GameError>
    where
        S: Strategy + Sync,
    {
        Ok(run_batch(solver, length, trials, &mut self.rng)?)
    }
}
