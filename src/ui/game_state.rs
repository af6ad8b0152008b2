//! Game session state for the Caro GUI
//!
//! `GameState` owns the authoritative board. The engine only ever sees
//! clones of it, and every move it returns is applied here.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::board::DEFAULT_BOARD_SIZE;
use crate::rules::{self, Outcome, WIN_LENGTH};
use crate::{Board, Engine, MoveResult, Pos, Stone};

/// Board sizes offered by the front-end
pub const BOARD_SIZES: [usize; 3] = [10, 13, 15];

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the board, engine available for hints
    TwoPlayers,
    /// Human against the engine; X always moves first
    VsEngine { human: Stone },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsEngine { human: Stone::X }
    }
}

/// Reasons a human move is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("the engine is thinking")]
    EngineThinking,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("cell {pos} is outside the board")]
    OutOfBounds { pos: Pos },

    #[error("cell {pos} is already occupied")]
    Occupied { pos: Pos },
}

/// Results accumulated across games of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Stone::X) => self.x_wins += 1,
            Outcome::Win(_) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// What a running engine search is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineTask {
    /// The engine's own move, applied to the board when done
    Move,
    /// A suggestion for the human to move, only shown
    Hint,
}

/// Engine computation state
pub enum EngineState {
    Idle,
    Thinking {
        task: EngineTask,
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub outcome: Option<Outcome>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_engine_result: Option<MoveResult>,
    pub engine_state: EngineState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub scoreboard: Scoreboard,
    engine: Engine,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, DEFAULT_BOARD_SIZE, Engine::new())
    }

    /// Create a session on a `size`x`size` board driven by `engine`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a supported board size.
    pub fn with_engine(mode: GameMode, size: usize, engine: Engine) -> Self {
        Self {
            board: Board::new(size),
            mode,
            current_turn: Stone::X,
            outcome: None,
            winning_line: None,
            last_move: None,
            move_history: Vec::new(),
            last_engine_result: None,
            engine_state: EngineState::Idle,
            suggested_move: None,
            message: None,
            scoreboard: Scoreboard::default(),
            engine,
        }
    }

    /// Start a fresh game on a board of the same size. The scoreboard is kept.
    pub fn new_game(&mut self) {
        self.board = Board::new(self.board.size());
        self.current_turn = Stone::X;
        self.outcome = None;
        self.winning_line = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_engine_result = None;
        self.engine_state = EngineState::Idle;
        self.suggested_move = None;
        self.message = None;
        log::info!("new {0}x{0} game, mode {1:?}", self.board.size(), self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.new_game();
    }

    /// Switch the board size and start a new game.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a supported board size.
    pub fn set_board_size(&mut self, size: usize) {
        self.board = Board::new(size);
        self.new_game();
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsEngine { human } => self.current_turn == human,
            GameMode::TwoPlayers => true,
        }
    }

    /// Check if it's the engine's turn
    pub fn is_engine_turn(&self) -> bool {
        match self.mode {
            GameMode::VsEngine { human } => self.current_turn != human,
            GameMode::TwoPlayers => false,
        }
    }

    /// Check if a search (move or hint) is running
    pub fn is_engine_thinking(&self) -> bool {
        matches!(self.engine_state, EngineState::Thinking { .. })
    }

    /// Task of the running search, if any
    pub fn engine_task(&self) -> Option<EngineTask> {
        match self.engine_state {
            EngineState::Thinking { task, .. } => Some(task),
            EngineState::Idle => None,
        }
    }

    /// Check if the engine is computing its own move
    pub fn is_engine_moving(&self) -> bool {
        self.engine_task() == Some(EngineTask::Move)
    }

    /// Drop a pending hint; the worker's result is discarded
    fn cancel_hint(&mut self) {
        if self.engine_task() == Some(EngineTask::Hint) {
            log::debug!("hint search abandoned");
            self.engine_state = EngineState::Idle;
        }
    }

    /// Attempt to place a stone for the side to move.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_engine_moving() {
            return Err(MoveError::EngineThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.contains(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds { pos });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }

        self.cancel_hint();
        self.apply_move(pos);
        Ok(())
    }

    /// Apply a move for the side to move and update the outcome
    fn apply_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        if !self.board.set_move(pos, color) {
            log::warn!("{color:?} move at {pos} rejected by the board");
            return;
        }

        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.current_turn = color.opponent();

        if let Some(outcome) = rules::outcome(&self.board) {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.winning_line = match outcome {
            Outcome::Win(stone) => rules::find_five_positions(&self.board, stone),
            Outcome::Draw => None,
        };
        self.outcome = Some(outcome);
        self.scoreboard.record(outcome);
        log::info!(
            "game over after {} moves: {outcome:?} (X {} / O {} / draws {})",
            self.move_history.len(),
            self.scoreboard.x_wins,
            self.scoreboard.o_wins,
            self.scoreboard.draws
        );
    }

    /// Start the engine on a worker thread if it is its turn
    pub fn start_engine_thinking(&mut self) {
        if !self.is_engine_turn() || self.is_engine_thinking() || self.is_game_over() {
            return;
        }
        self.spawn_search(EngineTask::Move);
    }

    /// Search the current position for the side to move off the UI thread
    fn spawn_search(&mut self, task: EngineTask) {
        let board = self.board.clone();
        let color = self.current_turn;
        let ply_count = board.stone_count();
        let engine = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.best_move_with_stats(&board, color, ply_count);
            let _ = tx.send(result);
        });

        self.engine_state = EngineState::Thinking {
            task,
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Collect a finished search: apply the engine's move or show the hint
    pub fn poll_engine(&mut self) {
        let result = match &self.engine_state {
            EngineState::Thinking { task, receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some((*task, result)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("engine worker stopped without a result");
                    self.engine_state = EngineState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            EngineState::Idle => None,
        };

        if let Some((task, move_result)) = result {
            self.engine_state = EngineState::Idle;
            let best_move = move_result.best_move;
            self.last_engine_result = Some(move_result);

            match (task, best_move) {
                (EngineTask::Hint, _) => self.suggested_move = best_move,
                (EngineTask::Move, Some(pos)) => self.apply_move(pos),
                (EngineTask::Move, None) => self.finish(Outcome::Draw),
            }
        }
    }

    /// Time the engine has been thinking, if it is
    pub fn engine_thinking_elapsed(&self) -> Option<Duration> {
        match &self.engine_state {
            EngineState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            EngineState::Idle => None,
        }
    }

    /// Ask the engine for a suggestion for the side to move.
    ///
    /// The search runs on the worker thread; [`GameState::poll_engine`]
    /// fills `suggested_move` when it finishes.
    pub fn request_hint(&mut self) {
        if self.is_game_over() || self.is_engine_thinking() || !self.is_human_turn() {
            return;
        }
        self.suggested_move = None;
        self.spawn_search(EngineTask::Hint);
    }

    /// Take back the last move. Against the engine, the engine's reply and
    /// the human move before it go together, so the human is to move again.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_engine_moving() {
            return;
        }
        self.cancel_hint();

        let last_by_engine = match (self.mode, self.move_history.last()) {
            (GameMode::VsEngine { human }, Some(&(_, color))) => color != human,
            _ => false,
        };
        let undo_count = if last_by_engine && self.move_history.len() >= 2 { 2 } else { 1 };

        // A finished game is no longer counted once it is taken back
        if let Some(outcome) = self.outcome {
            match outcome {
                Outcome::Win(Stone::X) => self.scoreboard.x_wins -= 1,
                Outcome::Win(_) => self.scoreboard.o_wins -= 1,
                Outcome::Draw => self.scoreboard.draws -= 1,
            }
        }

        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = Board::new(self.board.size());
        self.current_turn = Stone::X;
        self.outcome = None;
        self.winning_line = None;
        self.last_move = None;
        self.suggested_move = None;

        for (pos, color) in moves {
            self.board.set_move(pos, color);
            self.move_history.push((pos, color));
            self.last_move = Some(pos);
            self.current_turn = color.opponent();
        }
    }
}
