pub mod game;
pub mod pieces;
pub mod sound;

pub use game::{DragState, GameModel, MoveOutcome, PendingPromotion, PromotionChoice};
pub use pieces::{Highlight, PieceInstance, PieceSet, TurnEffect};
pub use sound::SoundCue;
