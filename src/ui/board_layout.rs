//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::Position;
use crate::ui::theme::{BOARD_PADDING, PIECE_SCALE};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_width: f32,
    pub panel_height: f32,
    pub piece_scale: f32,
}

impl BoardLayout {
    pub fn new(panel_width: f32, panel_height: f32) -> Self {
        Self {
            panel_width,
            panel_height,
            piece_scale: PIECE_SCALE,
        }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let available_width = self.panel_width - BOARD_PADDING * 2.0;
        let available_height = self.panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / 8.0).max(30.0)
    }

    /// Calculate piece size based on square size
    pub fn piece_size(&self) -> f32 {
        self.square_size() * self.piece_scale
    }

    /// Convert position relative to board panel to a board square (if within board)
    pub fn pos_to_square(&self, x: f32, y: f32) -> Option<Position> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (board_x / square_size) as usize;
        let row = (board_y / square_size) as usize;

        Position::new(row, col)
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(540.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_size_uses_smaller_side() {
        let layout = BoardLayout::new(440.0, 1000.0);
        assert_eq!(layout.square_size(), 50.0);
        assert_eq!(layout.board_total_size(), 400.0);
    }

    #[test]
    fn test_square_size_has_floor() {
        let layout = BoardLayout::new(100.0, 100.0);
        assert_eq!(layout.square_size(), 30.0);
    }

    #[test]
    fn test_pos_to_square() {
        let layout = BoardLayout::new(440.0, 440.0);
        assert_eq!(layout.pos_to_square(21.0, 21.0), Some(Position { row: 0, col: 0 }));
        assert_eq!(layout.pos_to_square(419.0, 71.0), Some(Position { row: 1, col: 7 }));
        assert_eq!(layout.pos_to_square(10.0, 30.0), None);
        assert_eq!(layout.pos_to_square(421.0, 30.0), None);
    }

    #[test]
    fn test_piece_size_follows_scale() {
        let mut layout = BoardLayout::new(440.0, 440.0);
        layout.piece_scale = 0.5;
        assert_eq!(layout.piece_size(), 25.0);
    }
}
