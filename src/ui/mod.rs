//! GUI module for the Caro game
//!
//! The session logic in [`GameState`] is independent of egui; the rest of
//! this module draws it with eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CaroApp;
pub use game_state::{EngineState, EngineTask, GameMode, GameState, MoveError, Scoreboard, BOARD_SIZES};
