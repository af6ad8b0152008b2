//! Main engine integrating move generation, search and evaluation
//!
//! The engine answers one question: given a position and the side to move,
//! which cell should that side play? It picks a depth limit from how full
//! the board is, generates candidates around existing stones and runs an
//! alpha-beta minimax over cloned boards.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Engine, Pos, Stone};
//!
//! let engine = Engine::new();
//! let mut board = Board::new(15);
//! board.set_move(Pos::new(7, 7), Stone::X);
//!
//! let result = engine.best_move_with_stats(&board, Stone::O, board.stone_count());
//! println!("Best move: {:?}", result.best_move);
//! println!("Depth: {}, nodes: {}", result.depth, result.nodes);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::{ConfigError, EngineConfig};
use crate::eval::evaluate;
use crate::search::{candidate_moves, SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when no move is available (full board)
    pub best_move: Option<Pos>,
    /// Score of the chosen move from the engine player's view
    pub score: i32,
    /// Depth limit used for this position
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Move-selection engine for Caro.
///
/// The engine holds only its configuration; every search starts from the
/// board it is given and never writes to it.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the default configuration.
    ///
    /// Defaults: neighborhood radius 2, depth 3/2/1 switching at 20 and 40
    /// stones, reference score table, defense weight 5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use caro::{DepthSchedule, Engine, EngineConfig};
    ///
    /// let engine = Engine::with_config(
    ///     EngineConfig::default().with_depth(DepthSchedule::fixed(2)),
    /// ).unwrap();
    /// assert_eq!(engine.adaptive_depth(100), 2);
    /// ```
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Depth limit for a position with `ply_count` stones placed
    #[inline]
    pub fn adaptive_depth(&self, ply_count: usize) -> u8 {
        self.config.depth.depth_for(ply_count)
    }

    /// Candidate moves the search would consider on `board`
    pub fn candidate_moves(&self, board: &Board) -> Vec<Pos> {
        candidate_moves(board, self.config.neighbor_radius)
    }

    /// Static evaluation of `board` from `player`'s view
    #[must_use]
    pub fn evaluate(&self, board: &Board, player: Stone) -> i32 {
        evaluate(board, player, &self.config.scores, self.config.defense_weight)
    }

    /// Get the best move for `player`.
    ///
    /// `ply_count` is the number of stones already on the board; it only
    /// selects the depth limit. Returns `None` when the board is full.
    ///
    /// # Panics
    ///
    /// Panics if `player` is `Stone::Empty`.
    #[must_use]
    pub fn best_move(&self, board: &Board, player: Stone, ply_count: usize) -> Option<Pos> {
        self.best_move_with_stats(board, player, ply_count).best_move
    }

    /// Get the best move for `player` along with search statistics.
    ///
    /// # Panics
    ///
    /// Panics if `player` is `Stone::Empty`.
    #[must_use]
    pub fn best_move_with_stats(&self, board: &Board, player: Stone, ply_count: usize) -> MoveResult {
        assert!(player != Stone::Empty, "engine player must be X or O");

        let start = Instant::now();
        let depth = self.adaptive_depth(ply_count);

        let mut searcher = Searcher::new(&self.config);
        let result = searcher.search_root(board, player, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(pos) => log::debug!(
                "{player:?} plays {pos} (score {}, depth {depth}, {} nodes, {time_ms}ms)",
                result.score,
                result.nodes
            ),
            None => log::debug!("{player:?} has no move available"),
        }

        MoveResult::from_search(result, time_ms)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepthSchedule;

    fn parse(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_plays_center() {
        let engine = Engine::new();
        let board = Board::new(15);
        assert_eq!(engine.best_move(&board, Stone::X, 0), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_empty_small_board_plays_center() {
        let engine = Engine::new();
        let board = Board::new(10);
        assert_eq!(engine.best_move(&board, Stone::O, 0), Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = Engine::with_config(EngineConfig::default().with_defense_weight(0));
        assert!(matches!(result, Err(ConfigError::InvalidDefenseWeight { weight: 0 })));
    }

    #[test]
    fn test_adaptive_depth_uses_schedule() {
        let engine = Engine::new();
        assert_eq!(engine.adaptive_depth(0), 3);
        assert_eq!(engine.adaptive_depth(25), 2);
        assert_eq!(engine.adaptive_depth(60), 1);
    }

    #[test]
    fn test_completes_closed_four() {
        let engine = Engine::new();
        let board = parse(
            "
            ..........
            ..........
            ..........
            ..........
            ..........
            .OXXXX....
            ..O.......
            ...O......
            ..........
            ..........",
        );
        let result = engine.best_move_with_stats(&board, Stone::X, board.stone_count());
        assert_eq!(result.best_move, Some(Pos::new(5, 6)));
        assert_eq!(result.score, 1_000_000 - 1_000);
    }

    #[test]
    fn test_blocks_four_with_one_open_end() {
        let engine = Engine::new();
        let board = parse(
            "
            ..........
            ..........
            .XOOOO....
            ..........
            ..........
            ......X...
            .......X..
            ..........
            ..........
            ..........",
        );
        assert_eq!(engine.best_move(&board, Stone::X, board.stone_count()), Some(Pos::new(2, 6)));
    }

    #[test]
    fn test_prefers_own_win_over_blocking() {
        let engine = Engine::new();
        let board = parse(
            "
            ..........
            ..........
            ..OOOO....
            ..........
            ..........
            ..XXXX....
            ..........
            ..........
            ..........
            ..........",
        );
        let mv = engine.best_move(&board, Stone::X, board.stone_count());
        assert!(mv == Some(Pos::new(5, 1)) || mv == Some(Pos::new(5, 6)), "got {mv:?}");
    }

    #[test]
    fn test_best_move_leaves_board_untouched() {
        let engine = Engine::new();
        let board = parse(
            "
            ..........
            ..........
            ..........
            ...XO.....
            ....X.....
            ....O.....
            ..........
            ..........
            ..........
            ..........",
        );
        let before = board.clone();
        let mv = engine.best_move(&board, Stone::X, board.stone_count()).unwrap();
        assert_eq!(board, before);
        assert!(board.is_empty(mv));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let engine = Engine::new();
        let board = parse(
            "
            XXOOX
            OOXXO
            XXOOX
            OOXXO
            XXOOX",
        );
        let result = engine.best_move_with_stats(&board, Stone::X, 25);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_last_empty_cell_is_played() {
        let engine = Engine::new();
        let board = parse(
            "
            XXOOX
            OOXXO
            XX.OX
            OOXXO
            XXOOX",
        );
        assert_eq!(engine.best_move(&board, Stone::O, 24), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_depth_one_still_blocks() {
        // Depth 1 only sees the position after our move; the defense weight
        // has to make the block the best static choice.
        let engine =
            Engine::with_config(EngineConfig::default().with_depth(DepthSchedule::fixed(1))).unwrap();
        let board = parse(
            "
            ..........
            ..........
            ..........
            ..OOO.....
            ..........
            ..........
            ...X......
            ....X.....
            ..........
            ..........",
        );
        let mv = engine.best_move(&board, Stone::X, board.stone_count());
        assert!(mv == Some(Pos::new(3, 1)) || mv == Some(Pos::new(3, 5)), "got {mv:?}");
    }

    #[test]
    #[should_panic(expected = "engine player")]
    fn test_empty_player_panics() {
        let engine = Engine::new();
        let _ = engine.best_move(&Board::new(10), Stone::Empty, 0);
    }
}
