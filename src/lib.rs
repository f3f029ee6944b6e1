//! Bulls and Cows Solver
//!
//! Generates and scores secrets of distinct digits, and breaks unknown secrets by
//! drawing random candidates and eliminating those inconsistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Answer, DigitSequence};
//! use bulls_cows::solver::{Solver, StrongStrategy};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let secret = DigitSequence::new("4271").unwrap();
//! let guess = DigitSequence::new("1234").unwrap();
//! assert_eq!(Answer::score(&secret, &guess), Answer::new(1, 2));
//!
//! let solver = Solver::new(StrongStrategy);
//! let solution = solver
//!     .solve(&secret, &mut StdRng::seed_from_u64(7), |record| {
//!         println!("#{} {} {}", record.index, record.guess, record.answer);
//!     })
//!     .unwrap();
//! assert_eq!(solution.sequence, secret);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game session facade
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
