//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 230);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Marks
pub const CROSS_COLOR: Color32 = Color32::from_rgb(220, 80, 70);
pub const RING_COLOR: Color32 = Color32::from_rgb(60, 120, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const NOTICE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_RATIO: f32 = 0.12;
pub const CROSS_ARM_RATIO: f32 = 0.3;
// Ring radii from a 10-unit cell: 6 - sqrt(2) and 6 - 2 * sqrt(2)
pub const RING_OUTER_RATIO: f32 = 0.4586;
pub const RING_INNER_RATIO: f32 = 0.3172;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
