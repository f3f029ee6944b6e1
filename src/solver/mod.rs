//! Bulls and Cows solving engine
//!
//! Candidate generation, elimination strategies, the solve loop and batch runs.

pub mod batch;
mod engine;
mod pool;
pub mod strategy;
pub mod universe;

pub use batch::{
    BatchReport, StrategyComparison, compare_strategies, run_batch, run_batch_with_progress,
};
pub use engine::{GuessRecord, Solution, SolveError, SolveLoop, SolveState, Solver};
pub use pool::CandidatePool;
pub use strategy::{Strategy, StrategyType, StrongStrategy, WeakStrategy};
pub use universe::{random_secret, universe_size};
