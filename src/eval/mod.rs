//! Position evaluation for Caro
//!
//! - [`patterns`]: run-length score table
//! - [`heuristic`]: static evaluation of a position

pub mod heuristic;
pub mod patterns;

pub use heuristic::{count_run, evaluate, evaluate_runs};
pub use patterns::ScoreTable;
