//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;
pub mod solve;

pub use benchmark::{run_benchmark, run_comparison};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, cancel_after, solve_secret};
