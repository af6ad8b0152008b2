//! Caro (five in a row) engine
//!
//! A bounded-depth move-selection engine for Caro/Gomoku on square boards
//! from 5x5 to 19x19:
//! - Five or more in a row wins, in any of the four directions
//! - A full board without a five is a draw
//! - No forbidden moves and no captures
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Run-length heuristic evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`config`]: Engine configuration
//! - [`engine`]: Main engine integrating all components
//! - [`ui`]: Game session and egui front-end
//!
//! # Quick Start
//!
//! ```
//! use caro::{Board, Engine, Pos, Stone};
//!
//! let mut board = Board::new(15);
//! let engine = Engine::new();
//!
//! board.set_move(Pos::new(7, 7), Stone::X);
//!
//! // Engine responds as O
//! if let Some(pos) = engine.best_move(&board, Stone::O, board.stone_count()) {
//!     board.set_move(pos, Stone::O);
//!     println!("Engine plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! Candidates are the empty cells near existing stones. Each one is tried
//! on a cloned board and scored by minimax with alpha-beta pruning. The
//! depth limit shrinks as the board fills so response time stays flat.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, DepthSchedule, EngineConfig};
pub use engine::{Engine, MoveResult};
pub use rules::Outcome;
