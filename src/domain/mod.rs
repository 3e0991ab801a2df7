pub mod action;
pub mod chess;
pub mod fen;
pub mod history;

pub use action::{Action, Direction, PieceId, Turn};
pub use chess::{Piece, PieceColor, PieceKind, Position, shakmaty_to_piece, to_square};
pub use fen::{Board, Cell, FEN_STARTING_POSITION, FenFault, MalformedFen, MovedFlags, decode, encode};
pub use history::History;
