mod piece;
mod promotion;
mod square;

pub use piece::render_piece;
pub use promotion::render_promotion_picker;
pub use square::{SquareState, render_square};
