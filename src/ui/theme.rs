//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Cell colors
pub const CELL_BG: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
pub const CELL_HOVER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const O_MARK: Color32 = Color32::from_rgb(0x00, 0x40, 0x80);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(90, 90, 95);

// Result colors
pub const HUMAN_WIN: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
pub const AI_WIN: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const TIE: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const CELL_GAP: f32 = 10.0;
pub const CELL_ROUNDING: u8 = 6;
pub const MARK_FONT_RATIO: f32 = 0.6;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
