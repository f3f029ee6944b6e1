//! Bulls and cows scoring
//!
//! An `Answer` is the feedback a guess receives:
//! - bulls: right digit in the right position
//! - cows: digit present in the reference, but at a different position

use super::DigitSequence;
use std::fmt;

/// Feedback for one guess against a reference sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Answer {
    pub bulls: usize,
    pub cows: usize,
}

impl Answer {
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Score `candidate` against `reference`
    ///
    /// Both sequences must have the same length; callers check this before
    /// scoring. Since digits within a sequence are distinct, one pass suffices:
    /// a position is a bull if the digits match, otherwise a cow if the
    /// candidate's digit occurs anywhere in the reference.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Answer, DigitSequence};
    ///
    /// let secret = DigitSequence::new("4271").unwrap();
    /// let guess = DigitSequence::new("1234").unwrap();
    ///
    /// // Bull: 2. Cows: 4 and 1.
    /// assert_eq!(Answer::score(&secret, &guess), Answer::new(1, 2));
    /// ```
    #[must_use]
    pub fn score(reference: &DigitSequence, candidate: &DigitSequence) -> Self {
        debug_assert_eq!(
            reference.len(),
            candidate.len(),
            "scored sequences must have equal length"
        );

        let bulls = reference.positional_matches(candidate);
        let cows = reference.common_digits(candidate) - bulls;

        Self { bulls, cows }
    }

    /// Total digits shared with the reference, regardless of position
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.bulls + self.cows
    }

    /// Check if every position of a sequence of `length` digits is a bull
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.bulls == length
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bulls: {} Cows: {}", self.bulls, self.cows)
    }
}
