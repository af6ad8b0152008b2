//! Game rules for Caro
//!
//! Five consecutive stones in a row, column or diagonal win. Longer runs
//! also win because they contain a five-cell window. A full board without
//! a five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_positions, has_five_in_row, outcome, Outcome, WIN_LENGTH};
