//! One-off scoring command

use crate::core::{Answer, DigitSequence};
use crate::game::{Game, GameError};
use rand::Rng;

/// A scored guess, with both sequences as parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: DigitSequence,
    pub guess: DigitSequence,
    pub answer: Answer,
}

/// Score `guess` against `secret`, both given as digit strings
///
/// # Errors
///
/// Returns an error if either string is not a valid sequence or the lengths differ.
pub fn score_guess<R: Rng>(
    game: &mut Game<R>,
    secret: &str,
    guess: &str,
) -> Result<ScoreResult, GameError> {
    let secret = DigitSequence::new(secret)?;
    let guess = DigitSequence::new(guess)?;
    game.set_secret(secret);

    Ok(ScoreResult {
        secret,
        guess,
        answer: game.propose(&guess)?,
    })
}
