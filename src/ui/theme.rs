//! Theme constants and colors for the chess UI.

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const GHOST_OPACITY: f32 = 0.4;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 540.0;
pub const INITIAL_RIGHT_PANEL: f32 = 280.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const LIGHT_MOVED: u32 = 0xF6EB72;
pub const DARK_MOVED: u32 = 0xDCC34B;
pub const HOVER_BORDER: u32 = 0xF8F8F8;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const PROMOTION_BG: u32 = 0x262522;

pub fn is_light_square(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}
