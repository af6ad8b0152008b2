//! Search module for the Caro engine
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher};
pub use movegen::candidate_moves;
