//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod answer;
mod digits;

pub use answer::Answer;
pub use digits::{DigitError, DigitSequence, MAX_LENGTH};
