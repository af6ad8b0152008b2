//! Theme constants for the Caro GUI

use egui::Color32;

// Board colors - squared paper
pub const BOARD_BG: Color32 = Color32::from_rgb(250, 248, 240);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(90, 110, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(170, 185, 205);
pub const COORD_TEXT: Color32 = Color32::from_rgb(110, 120, 135);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(210, 50, 60);
pub const O_MARK: Color32 = Color32::from_rgb(40, 90, 200);

// Highlights
pub const LAST_MOVE_BG: Color32 = Color32::from_rgb(255, 236, 170);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 180, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

pub fn mark_color(stone: crate::Stone) -> Color32 {
    match stone {
        crate::Stone::X => X_MARK,
        _ => O_MARK,
    }
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Engine timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const BORDER_WIDTH: f32 = 2.0;
