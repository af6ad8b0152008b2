//! Board representation for Caro

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, BoardParseError};

/// Smallest supported board (a five must fit)
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (bitboard capacity)
pub const MAX_BOARD_SIZE: usize = 19;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361
/// Size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Cell contents / player symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent symbol
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::X => 'X',
            Stone::O => 'O',
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Stone> {
        match c {
            '.' | '_' | '-' => Some(Stone::Empty),
            'X' | 'x' => Some(Stone::X),
            'O' | 'o' => Some(Stone::O),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
