//! Square Caro board backed by two bitboards

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board of `size x size` cells.
///
/// A cell goes from `Empty` to occupied exactly once. Search never reverts a
/// move in place; it clones the board instead, which is cheap since the
/// whole position is two fixed-size bitboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// X stones bitboard
    x: Bitboard,
    /// O stones bitboard
    o: Bitboard,
}

/// Errors produced when parsing a board from its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board text contains no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected} (board must be square)")]
    NotSquare { row: usize, expected: usize, got: usize },

    #[error("unsupported board size {size} (must be 5-19)")]
    UnsupportedSize { size: usize },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCharacter { character: char, row: usize, col: usize },
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "unsupported board size {size}"
        );
        Self {
            size,
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Signed bounds check for scanners walking off the edge
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            (pos.row as usize) < self.size && (pos.col as usize) < self.size,
            "position {pos} is outside the {size}x{size} board",
            size = self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    fn pos_at(size: usize, idx: usize) -> Pos {
        Pos::new((idx / size) as u8, (idx % size) as u8)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.x = Bitboard::new();
        self.o = Bitboard::new();
    }

    /// Place `stone` at `pos` if the cell is empty.
    ///
    /// Returns `false` without touching the board when the cell is already
    /// occupied or `stone` is `Empty`.
    pub fn set_move(&mut self, pos: Pos, stone: Stone) -> bool {
        let idx = self.index(pos);
        if self.x.get(idx) || self.o.get(idx) {
            return false;
        }
        match stone {
            Stone::X => self.x.set(idx),
            Stone::O => self.o.set(idx),
            Stone::Empty => return false,
        }
        true
    }

    /// Get stone at position
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.x.get(idx) {
            Stone::X
        } else if self.o.get(idx) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        let occupied = self.x.union(&self.o);
        (0..self.size * self.size)
            .filter(|&idx| !occupied.get(idx))
            .map(|idx| Self::pos_at(self.size, idx))
            .collect()
    }

    /// Positions held by `stone` in row-major order (none for `Empty`)
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bitboard = match stone {
            Stone::X => Some(&self.x),
            Stone::O => Some(&self.o),
            Stone::Empty => None,
        };
        let size = self.size;
        bitboard
            .into_iter()
            .flat_map(Bitboard::iter_ones)
            .map(move |idx| Self::pos_at(size, idx))
    }

    /// Every occupied position in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        self.x
            .union(&self.o)
            .iter_ones()
            .map(move |idx| Self::pos_at(size, idx))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.x.count() + self.o.count()) as usize
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.size * self.size
    }

    /// Center cell `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Whether `stone` holds five consecutive cells in any direction
    #[inline]
    pub fn has_five_in_row(&self, stone: Stone) -> bool {
        crate::rules::has_five_in_row(self, stone)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)).to_char())?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse rows of `.`, `X` and `O`. Blank lines and whitespace between
    /// cells are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardParseError::UnsupportedSize { size });
        }

        let mut board = Board::new(size);
        for (r, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardParseError::NotSquare {
                    row: r,
                    expected: size,
                    got: cells.len(),
                });
            }
            for (c, &ch) in cells.iter().enumerate() {
                let stone = Stone::from_char(ch).ok_or(BoardParseError::InvalidCharacter {
                    character: ch,
                    row: r,
                    col: c,
                })?;
                if stone != Stone::Empty {
                    board.set_move(Pos::new(r as u8, c as u8), stone);
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(10);
        assert_eq!(board.size(), 10);
        assert!(board.is_board_empty());
        assert_eq!(board.empty_cells().len(), 100);
    }

    #[test]
    fn test_set_move_only_on_empty() {
        let mut board = Board::new(15);
        let pos = Pos::new(3, 4);
        assert!(board.set_move(pos, Stone::X));
        assert!(!board.set_move(pos, Stone::O));
        assert_eq!(board.get(pos), Stone::X);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_set_move_rejects_empty_stone() {
        let mut board = Board::new(15);
        assert!(!board.set_move(Pos::new(0, 0), Stone::Empty));
        assert!(board.is_board_empty());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_bounds_panics() {
        let board = Board::new(10);
        let _ = board.get(Pos::new(10, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_move_out_of_bounds_panics() {
        let mut board = Board::new(10);
        board.set_move(Pos::new(0, 12), Stone::X);
    }

    #[test]
    #[should_panic(expected = "unsupported board size")]
    fn test_board_too_small_panics() {
        let _ = Board::new(4);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new(10);
        board.set_move(Pos::new(1, 1), Stone::X);
        board.set_move(Pos::new(2, 2), Stone::O);
        board.reset();
        assert!(board.is_board_empty());
        assert_eq!(board.size(), 10);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(5);
        board.set_move(Pos::new(0, 0), Stone::X);
        board.set_move(Pos::new(0, 2), Stone::O);
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 23);
        assert_eq!(empty[0], Pos::new(0, 1));
        assert_eq!(empty[1], Pos::new(0, 3));
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(15);
        board.set_move(Pos::new(7, 7), Stone::X);

        let mut copy = board.clone();
        assert_eq!(copy, board);

        copy.set_move(Pos::new(7, 8), Stone::O);
        assert_eq!(board.get(Pos::new(7, 8)), Stone::Empty);
        assert_eq!(board.stone_count(), 1);
        assert_eq!(copy.stone_count(), 2);
    }

    #[test]
    fn test_stones_and_occupied_row_major() {
        let mut board = Board::new(10);
        board.set_move(Pos::new(5, 5), Stone::X);
        board.set_move(Pos::new(1, 9), Stone::O);
        board.set_move(Pos::new(1, 2), Stone::X);

        let xs: Vec<Pos> = board.stones(Stone::X).collect();
        assert_eq!(xs, vec![Pos::new(1, 2), Pos::new(5, 5)]);
        assert_eq!(board.stones(Stone::Empty).count(), 0);

        let all: Vec<Pos> = board.occupied().collect();
        assert_eq!(all, vec![Pos::new(1, 2), Pos::new(1, 9), Pos::new(5, 5)]);
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::new(15).center(), Pos::new(7, 7));
        assert_eq!(Board::new(10).center(), Pos::new(5, 5));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(5);
        for (i, pos) in board.empty_cells().into_iter().enumerate() {
            let stone = if i % 2 == 0 { Stone::X } else { Stone::O };
            assert!(board.set_move(pos, stone));
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_parse_and_display() {
        let text = "\
            X....
            .O...
            .....
            ...X.
            ....O";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.get(Pos::new(0, 0)), Stone::X);
        assert_eq!(board.get(Pos::new(1, 1)), Stone::O);
        assert_eq!(board.get(Pos::new(3, 3)), Stone::X);
        assert_eq!(board.stone_count(), 4);
        assert_eq!(board.to_string(), "X....\n.O...\n.....\n...X.\n....O");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
        assert_eq!(
            "...\n...\n...".parse::<Board>(),
            Err(BoardParseError::UnsupportedSize { size: 3 })
        );
        assert_eq!(
            ".....\n.....\n....\n.....\n.....".parse::<Board>(),
            Err(BoardParseError::NotSquare { row: 2, expected: 5, got: 4 })
        );
        assert_eq!(
            ".....\n.....\n..#..\n.....\n.....".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter { character: '#', row: 2, col: 2 })
        );
    }
}
