//! Theme constants for the sandbox GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const CELL_DARK: Color32 = Color32::from_rgb(210, 170, 120);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Pieces
pub const FRIENDLY_PIECE: Color32 = Color32::from_rgb(200, 40, 40);
pub const ENEMY_PIECE: Color32 = Color32::from_rgb(30, 30, 35);
pub const PIECE_FACE: Color32 = Color32::from_rgb(245, 230, 200);

// Overlays
pub fn danger_zone() -> Color32 {
    Color32::from_rgba_unmultiplied(230, 50, 50, 80)
}

pub fn safe_square() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 200, 90, 90)
}

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub const BEST_MOVE: Color32 = Color32::from_rgb(255, 200, 40);
pub const FOLLOW_UP: Color32 = Color32::from_rgb(90, 160, 255);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_GOOD: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.4;
pub const MARKER_STROKE: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
