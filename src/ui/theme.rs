//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(238, 232, 213);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 56, 50);

// Mark colors, by roster index
pub const PARTY_COLORS: [Color32; 3] = [
    Color32::from_rgb(210, 60, 60),
    Color32::from_rgb(40, 110, 200),
    Color32::from_rgb(40, 150, 80),
];

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 160, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

/// Color of the mark of the party at `index`
pub fn party_color(index: usize) -> Color32 {
    PARTY_COLORS[index % PARTY_COLORS.len()]
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_SIZE_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
