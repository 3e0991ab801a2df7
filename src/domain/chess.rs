//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::{Color as SColor, File, Rank, Role, Square};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter for this kind
    pub fn letter(self) -> char {
        role_for(self).char()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row a pawn of this color promotes on
    pub fn promotion_row(self) -> usize {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// FEN letter, uppercase for white
    pub fn fen_char(self) -> char {
        piece_to_shakmaty(self).char()
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        shakmaty::Piece::from_char(ch).map(shakmaty_to_piece)
    }
}

/// A board coordinate. Row 0 = rank 8, col 0 = file a.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Returns `None` when either coordinate is off the board
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 8 && col < 8).then_some(Self { row, col })
    }

    pub fn square(self) -> Square {
        to_square(self.row, self.col)
    }

    pub fn from_square(sq: Square) -> Self {
        Self {
            row: 7 - sq.rank() as usize,
            col: sq.file() as usize,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square())
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}

fn role_for(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    };
    Piece { kind, color }
}

/// Convert our domain Piece to a shakmaty piece
pub fn piece_to_shakmaty(piece: Piece) -> shakmaty::Piece {
    let color = match piece.color {
        PieceColor::White => SColor::White,
        PieceColor::Black => SColor::Black,
    };
    shakmaty::Piece {
        color,
        role: role_for(piece.kind),
    }
}
