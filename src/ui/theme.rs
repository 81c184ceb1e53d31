//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const WINDOW_BG: Color32 = Color32::from_rgb(255, 255, 255);

// Stone colors
pub const PLAYER_A_STONE: Color32 = Color32::from_rgb(255, 0, 0);
pub const PLAYER_B_STONE: Color32 = Color32::from_rgb(0, 255, 0);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(30, 30, 30);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 200, 0);

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 18)
}

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 90)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
pub const TEXT_DRAW: Color32 = Color32::from_rgb(100, 100, 100);

// Sizes
pub const BOARD_MARGIN_RATIO: f32 = 0.1;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RATIO: f32 = 0.12;
pub const WIN_OUTLINE_WIDTH: f32 = 4.0;
