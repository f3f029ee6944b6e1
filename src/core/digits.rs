//! Digit sequence representation
//!
//! A `DigitSequence` stores up to ten pairwise-distinct decimal digits along with
//! a presence mask, so membership tests during scoring are a single bit check.

use std::fmt;
use std::str::FromStr;

/// Largest possible sequence length (there are only ten decimal digits)
pub const MAX_LENGTH: usize = 10;

/// An ordered sequence of pairwise-distinct decimal digits
///
/// Used for the secret and for every candidate. Leading zeros are significant:
/// `"0123"` is a four-digit sequence, not the number 123.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: [u8; MAX_LENGTH],
    len: u8,
    mask: u16,
}

/// Error type for invalid digit sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    InvalidLength(usize),
    NonDigit(char),
    /// Raw digit value above 9
    OutOfRange(u8),
    DuplicateDigit(u8),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Sequence must have 1 to {MAX_LENGTH} digits, got {len}")
            }
            Self::NonDigit(c) => write!(f, "'{c}' is not a decimal digit"),
            Self::OutOfRange(d) => write!(f, "Digit value {d} is out of range 0-9"),
            Self::DuplicateDigit(d) => write!(f, "Digit {d} appears more than once"),
        }
    }
}

impl std::error::Error for DigitError {}

impl DigitSequence {
    /// Parse a sequence from a string of decimal digits
    ///
    /// # Errors
    /// Returns `DigitError` if:
    /// - Length is outside 1..=10
    /// - A character is not an ASCII digit
    /// - A digit is repeated
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::DigitSequence;
    ///
    /// let seq = DigitSequence::new("0123").unwrap();
    /// assert_eq!(seq.len(), 4);
    /// assert_eq!(seq.to_string(), "0123");
    ///
    /// assert!(DigitSequence::new("1123").is_err());
    /// assert!(DigitSequence::new("12a4").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, DigitError> {
        let text = text.trim();
        let count = text.chars().count();
        if count == 0 || count > MAX_LENGTH {
            return Err(DigitError::InvalidLength(count));
        }

        let mut digits = [0u8; MAX_LENGTH];
        for (slot, c) in digits.iter_mut().zip(text.chars()) {
            *slot = c
                .to_digit(10)
                .filter(|_| c.is_ascii())
                .ok_or(DigitError::NonDigit(c))? as u8;
        }

        Self::from_digits(&digits[..count])
    }

    /// Build a sequence from raw digit values (0-9)
    ///
    /// # Errors
    /// Returns `DigitError` on a bad length, a value above 9, or a repeated digit.
    pub fn from_digits(values: &[u8]) -> Result<Self, DigitError> {
        if values.is_empty() || values.len() > MAX_LENGTH {
            return Err(DigitError::InvalidLength(values.len()));
        }

        let mut digits = [0u8; MAX_LENGTH];
        let mut mask = 0u16;
        for (slot, &d) in digits.iter_mut().zip(values) {
            if d > 9 {
                return Err(DigitError::OutOfRange(d));
            }
            let bit = 1u16 << d;
            if mask & bit != 0 {
                return Err(DigitError::DuplicateDigit(d));
            }
            mask |= bit;
            *slot = d;
        }

        Ok(Self {
            digits,
            len: values.len() as u8,
            mask,
        })
    }

    /// Construct without validation; callers guarantee distinct digits in range
    pub(crate) fn from_parts(digits: [u8; MAX_LENGTH], len: usize, mask: u16) -> Self {
        debug_assert!(len <= MAX_LENGTH);
        debug_assert_eq!(mask.count_ones() as usize, len);
        Self {
            digits,
            len: len as u8,
            mask,
        }
    }

    /// Number of digits in the sequence
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed sequence; kept for API symmetry
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Digit at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.digits()[position]
    }

    /// Bit mask with bit `d` set for every digit `d` present
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    /// Check whether `digit` occurs anywhere in the sequence
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.mask & (1 << digit) != 0
    }

    /// Number of positions holding the same digit in both sequences
    #[inline]
    #[must_use]
    pub fn positional_matches(&self, other: &Self) -> usize {
        self.digits()
            .iter()
            .zip(other.digits())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Number of digits the two sequences share, ignoring position
    #[inline]
    #[must_use]
    pub const fn common_digits(&self, other: &Self) -> usize {
        (self.mask & other.mask).count_ones() as usize
    }
}

impl FromStr for DigitSequence {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
