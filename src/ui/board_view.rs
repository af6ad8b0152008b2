//! Board rendering for the Caro GUI
//!
//! Marks are drawn inside the squares of an `N`x`N` grid, with `N` taken
//! from the board being shown.

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::WIN_LENGTH;
use crate::{Board, Pos, Stone};

use super::theme::*;

/// What the board view needs from the session for one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Number of cells per side of the board last drawn
    cells: usize,
    /// Grid area (excluding the coordinate margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            cells: crate::board::DEFAULT_BOARD_SIZE,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let side = (available_size.x.min(available_size.y) - 20.0).max(120.0);

        self.cells = frame.board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.cells as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * self.cells as f32),
        );

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        if let Some(pos) = frame.last_move {
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::ZERO, LAST_MOVE_BG);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        for pos in frame.board.occupied() {
            self.draw_mark(&painter, pos, frame.board.get(pos), 255);
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(pos) = frame.suggested_move {
            self.draw_suggestion(&painter, pos, frame.current_turn);
        }

        let mut clicked_pos = None;

        if frame.accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = frame.board.is_empty(board_pos);

                    if is_valid {
                        painter.rect_filled(self.cell_rect(board_pos).shrink(1.0), CornerRadius::ZERO, hover_valid());
                        self.draw_mark(&painter, board_pos, frame.current_turn, 90);
                    } else {
                        painter.rect_filled(self.cell_rect(board_pos).shrink(1.0), CornerRadius::ZERO, hover_invalid());
                    }

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for i in 1..self.cells {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(rect.min.x + offset, rect.min.y), Pos2::new(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(rect.min.x, rect.min.y + offset), Pos2::new(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }

        painter.rect_stroke(
            rect,
            CornerRadius::ZERO,
            Stroke::new(BORDER_WIDTH, BOARD_BORDER),
            egui::StrokeKind::Middle,
        );
    }

    /// Column letters on top, row numbers on the left, both from the origin
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(11.0);

        for i in 0..self.cells {
            let mid = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'A' + i as u8) as char;
            let pos = Pos2::new(self.grid_rect.min.x + mid, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(pos, Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);

            let pos = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, self.grid_rect.min.y + mid);
            painter.text(pos, Align2::CENTER_CENTER, i + 1, font.clone(), COORD_TEXT);
        }
    }

    /// Draw an X or O mark, `alpha` < 255 for previews
    fn draw_mark(&self, painter: &Painter, pos: Pos, stone: Stone, alpha: u8) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_RATIO;
        let color = mark_color(stone).gamma_multiply(f32::from(alpha) / 255.0);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match stone {
            Stone::X => {
                painter.line_segment([center + Vec2::new(-half, -half), center + Vec2::new(half, half)], stroke);
                painter.line_segment([center + Vec2::new(-half, half), center + Vec2::new(half, -half)], stroke);
            }
            Stone::O => {
                painter.circle_stroke(center, half, stroke);
            }
            Stone::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pos in line {
            painter.rect_stroke(self.cell_rect(*pos).shrink(2.0), CornerRadius::same(3), stroke, egui::StrokeKind::Inside);
        }

        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[WIN_LENGTH - 1]);
        painter.line_segment([start, end], stroke);
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        if turn == Stone::Empty {
            return;
        }
        self.draw_mark(painter, pos, turn, 110);
        painter.text(
            self.cell_rect(pos).right_top() + Vec2::new(-6.0, 7.0),
            Align2::CENTER_CENTER,
            "?",
            FontId::proportional(12.0),
            mark_color(turn),
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let cells = self.cells as i32;
        if (0..cells).contains(&col) && (0..cells).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of the cell at `pos` in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
