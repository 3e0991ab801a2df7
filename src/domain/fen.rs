//! FEN decoding and encoding for the board model.
//!
//! Accepts both the full six-field form and the placement-only form used
//! for piece setup. Missing trailing fields fall back to defaults: white
//! to move, no castling rights, no en passant square, clocks `0 1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shakmaty::Square;
use thiserror::Error;

use super::chess::{Piece, PieceColor, Position};

pub const FEN_STARTING_POSITION: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub type Cell = Option<Piece>;

/// Why a FEN string was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenFault {
    Empty,
    RankCount(usize),
    RankWidth { rank: usize, width: usize },
    InvalidChar(char),
    SideToMove(String),
    Castling(String),
    EnPassant(String),
    HalfMoveClock(String),
    FullMoveNumber(String),
    TooManyFields(usize),
}

impl fmt::Display for FenFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenFault::Empty => write!(f, "empty input"),
            FenFault::RankCount(n) => write!(f, "expected 8 ranks, found {n}"),
            FenFault::RankWidth { rank, width } => {
                write!(f, "rank {} spans {width} squares", 8 - rank)
            }
            FenFault::InvalidChar(c) => write!(f, "invalid placement character {c:?}"),
            FenFault::SideToMove(s) => write!(f, "invalid side to move {s:?}"),
            FenFault::Castling(s) => write!(f, "invalid castling field {s:?}"),
            FenFault::EnPassant(s) => write!(f, "invalid en passant square {s:?}"),
            FenFault::HalfMoveClock(s) => write!(f, "invalid halfmove clock {s:?}"),
            FenFault::FullMoveNumber(s) => write!(f, "invalid fullmove number {s:?}"),
            FenFault::TooManyFields(n) => write!(f, "expected at most 6 fields, found {n}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed FEN {fen:?}: {fault}")]
pub struct MalformedFen {
    pub fen: String,
    pub fault: FenFault,
}

/// Castling bookkeeping: which kings and rooks have left their squares
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovedFlags {
    pub white_king: bool,
    pub white_king_rook: bool,
    pub white_queen_rook: bool,
    pub black_king: bool,
    pub black_king_rook: bool,
    pub black_queen_rook: bool,
}

impl MovedFlags {
    /// Every king and rook has moved: no castling rights left
    pub const ALL_MOVED: Self = Self {
        white_king: true,
        white_king_rook: true,
        white_queen_rook: true,
        black_king: true,
        black_king_rook: true,
        black_queen_rook: true,
    };

    fn parse(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(Self::ALL_MOVED);
        }
        let mut seen = [false; 4];
        for ch in field.chars() {
            let idx = "KQkq".find(ch)?;
            if seen[idx] {
                return None;
            }
            seen[idx] = true;
        }
        let [wk, wq, bk, bq] = seen;
        Some(Self {
            white_king: !(wk || wq),
            white_king_rook: !wk,
            white_queen_rook: !wq,
            black_king: !(bk || bq),
            black_king_rook: !bk,
            black_queen_rook: !bq,
        })
    }

    pub fn castling_string(&self) -> String {
        let rights = [
            ('K', !self.white_king && !self.white_king_rook),
            ('Q', !self.white_king && !self.white_queen_rook),
            ('k', !self.black_king && !self.black_king_rook),
            ('q', !self.black_king && !self.black_queen_rook),
        ];
        let s: String = rights
            .iter()
            .filter(|(_, allowed)| *allowed)
            .map(|(c, _)| *c)
            .collect();
        if s.is_empty() { "-".to_string() } else { s }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: [[Cell; 8]; 8],
    pub side_to_move: PieceColor,
    pub en_passant: Option<Position>,
    pub moved: MovedFlags,
    pub half_move_clock: u32,
    pub full_move_number: u32,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: PieceColor::White,
            en_passant: None,
            moved: MovedFlags::ALL_MOVED,
            half_move_clock: 0,
            full_move_number: 1,
        }
    }

    /// The standard starting position
    pub fn starting() -> Self {
        let mut board = Self::empty();
        let back = "rnbqkbnr";
        for (col, ch) in back.chars().enumerate() {
            board.grid[0][col] = Piece::from_fen_char(ch);
            board.grid[7][col] = Piece::from_fen_char(ch.to_ascii_uppercase());
            board.grid[1][col] = Piece::from_fen_char('p');
            board.grid[6][col] = Piece::from_fen_char('P');
        }
        board.moved = MovedFlags::default();
        board
    }

    pub fn piece_at(&self, pos: Position) -> Cell {
        self.grid[pos.row][pos.col]
    }

    pub fn castling_string(&self) -> String {
        self.moved.castling_string()
    }

    pub fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// Decode a FEN string into a [`Board`]
pub fn decode(fen: &str) -> Result<Board, MalformedFen> {
    let malformed = |fault| MalformedFen {
        fen: fen.to_string(),
        fault,
    };

    let fields: Vec<&str> = fen.split_ascii_whitespace().collect();
    if fields.len() > 6 {
        return Err(malformed(FenFault::TooManyFields(fields.len())));
    }
    let Some(placement) = fields.first() else {
        return Err(malformed(FenFault::Empty));
    };

    let mut board = Board::empty();
    board.grid = decode_placement(placement).map_err(malformed)?;

    if let Some(turn) = fields.get(1) {
        board.side_to_move = match *turn {
            "w" => PieceColor::White,
            "b" => PieceColor::Black,
            other => return Err(malformed(FenFault::SideToMove(other.to_string()))),
        };
    }

    if let Some(castling) = fields.get(2) {
        board.moved = MovedFlags::parse(castling)
            .ok_or_else(|| malformed(FenFault::Castling(castling.to_string())))?;
    }

    if let Some(ep) = fields.get(3) {
        board.en_passant = if *ep == "-" {
            None
        } else {
            let sq: Square = ep
                .parse()
                .map_err(|_| malformed(FenFault::EnPassant(ep.to_string())))?;
            Some(Position::from_square(sq))
        };
    }

    if let Some(halfmove) = fields.get(4) {
        board.half_move_clock = parse_counter(halfmove)
            .ok_or_else(|| malformed(FenFault::HalfMoveClock(halfmove.to_string())))?;
    }

    if let Some(fullmove) = fields.get(5) {
        board.full_move_number = parse_counter(fullmove)
            .ok_or_else(|| malformed(FenFault::FullMoveNumber(fullmove.to_string())))?;
    }

    Ok(board)
}

fn decode_placement(placement: &str) -> Result<[[Cell; 8]; 8], FenFault> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenFault::RankCount(ranks.len()));
    }

    let mut grid = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank.chars() {
            match ch {
                // 0 and 9 fall through and are reported as invalid characters
                '1'..='8' => {
                    col += ch as usize - '0' as usize;
                }
                _ => {
                    let piece = Piece::from_fen_char(ch).ok_or(FenFault::InvalidChar(ch))?;
                    if col < 8 {
                        grid[row][col] = Some(piece);
                    }
                    col += 1;
                }
            }
        }
        if col != 8 {
            return Err(FenFault::RankWidth { rank: row, width: col });
        }
    }
    Ok(grid)
}

// Plain decimal digits only: no sign, no whitespace.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Encode a [`Board`] as a six-field FEN string
pub fn encode(board: &Board) -> String {
    let placement: Vec<String> = board.grid.iter().map(|row| encode_rank(row)).collect();

    let turn = match board.side_to_move {
        PieceColor::White => "w",
        PieceColor::Black => "b",
    };

    let ep = board
        .en_passant
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement.join("/"),
        turn,
        board.castling_string(),
        ep,
        board.half_move_clock,
        board.full_move_number
    )
}

fn encode_rank(row: &[Cell; 8]) -> String {
    let mut out = String::new();
    let mut empty = 0;
    for cell in row {
        match cell {
            None => empty += 1,
            Some(piece) => {
                if empty > 0 {
                    out.push_str(&empty.to_string());
                    empty = 0;
                }
                out.push(piece.fen_char());
            }
        }
    }
    if empty > 0 {
        out.push_str(&empty.to_string());
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Board {
    type Err = MalformedFen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::{PieceKind, shakmaty_to_piece};
    use shakmaty::fen::Fen;

    fn fault(fen: &str) -> FenFault {
        decode(fen).unwrap_err().fault
    }

    #[test]
    fn test_decode_starting_position() {
        let board = decode(FEN_STARTING_POSITION).unwrap();
        assert_eq!(board, Board::starting());
        assert_eq!(
            board.piece_at(Position { row: 0, col: 4 }),
            Some(Piece::new(PieceKind::King, PieceColor::Black))
        );
        assert_eq!(
            board.piece_at(Position { row: 7, col: 3 }),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
        assert_eq!(board.piece_at(Position { row: 4, col: 4 }), None);
        assert_eq!(board.side_to_move, PieceColor::White);
        assert_eq!(board.moved, MovedFlags::default());
    }

    #[test]
    fn test_placement_matches_shakmaty() {
        let fens = [
            FEN_STARTING_POSITION,
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "8/2k5/8/3Pp3/8/8/5K2/8 w - e6 0 40",
        ];
        for fen in fens {
            let ours = decode(fen).unwrap();
            let theirs = Fen::from_ascii(fen.as_bytes()).unwrap();
            let setup = theirs.as_setup();
            for row in 0..8 {
                for col in 0..8 {
                    let pos = Position { row, col };
                    let expected = setup.board.piece_at(pos.square()).map(shakmaty_to_piece);
                    assert_eq!(ours.piece_at(pos), expected, "{fen} at {pos}");
                }
            }
            assert_eq!(ours.en_passant.map(|p| p.square()), setup.ep_square);
            assert_eq!(ours.half_move_clock, setup.halfmoves);
            assert_eq!(ours.full_move_number, setup.fullmoves.get());
        }
    }

    #[test]
    fn test_decode_minimal_placement() {
        let board = decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        assert_eq!(board.grid, Board::starting().grid);
        assert_eq!(board.side_to_move, PieceColor::White);
        assert_eq!(board.moved, MovedFlags::ALL_MOVED);
        assert_eq!(board.en_passant, None);
        assert_eq!(board.half_move_clock, 0);
        assert_eq!(board.full_move_number, 1);
        assert_eq!(
            encode(&board),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
    }

    #[test]
    fn test_decode_en_passant_and_clocks() {
        let board = decode("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(board.side_to_move, PieceColor::Black);
        // e3: file 4, rank index 2
        let ep = board.en_passant.unwrap();
        assert_eq!(ep.col, 4);
        assert_eq!(7 - ep.row, 2);
    }

    #[test]
    fn test_castling_flags() {
        let board = decode("r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1").unwrap();
        assert!(!board.moved.white_king);
        assert!(board.moved.white_king_rook);
        assert!(!board.moved.white_queen_rook);
        assert!(!board.moved.black_king);
        assert!(!board.moved.black_king_rook);
        assert!(board.moved.black_queen_rook);
        assert_eq!(board.castling_string(), "Qk");

        let none = decode("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert_eq!(none.moved, MovedFlags::ALL_MOVED);
    }

    #[test]
    fn test_castling_order_is_normalized() {
        let board = decode("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").unwrap();
        assert_eq!(encode(&board), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn test_round_trip() {
        let fens = [
            FEN_STARTING_POSITION,
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
            "8/8/8/8/8/8/8/8 b - - 99 250",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        ];
        for fen in fens {
            let board = decode(fen).unwrap();
            assert_eq!(encode(&board), fen);
            assert_eq!(decode(&encode(&board)).unwrap(), board);
        }
    }

    #[test]
    fn test_display_and_from_str() {
        let board: Board = FEN_STARTING_POSITION.parse().unwrap();
        assert_eq!(board.to_string(), FEN_STARTING_POSITION);
    }

    #[test]
    fn test_rejects_wrong_rank_count() {
        assert_eq!(fault("8/8/8/8/8/8/8"), FenFault::RankCount(7));
        assert_eq!(fault("8/8/8/8/8/8/8/8/8 w - - 0 1"), FenFault::RankCount(9));
    }

    #[test]
    fn test_rejects_wide_rank() {
        assert_eq!(
            fault("9/8/8/8/8/8/8/8 w - - 0 1"),
            FenFault::InvalidChar('9')
        );
        assert_eq!(
            fault("ppppppppp/8/8/8/8/8/8/8"),
            FenFault::RankWidth { rank: 0, width: 9 }
        );
        assert_eq!(
            fault("8/8/8/8/8/8/8/54 w - - 0 1"),
            FenFault::RankWidth { rank: 7, width: 9 }
        );
    }

    #[test]
    fn test_rejects_short_rank() {
        assert_eq!(
            fault("7/8/8/8/8/8/8/8"),
            FenFault::RankWidth { rank: 0, width: 7 }
        );
    }

    #[test]
    fn test_rejects_invalid_letter_and_zero() {
        assert_eq!(
            fault("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBXR w KQkq - 0 1"),
            FenFault::InvalidChar('X')
        );
        assert_eq!(fault("08/8/8/8/8/8/8/8"), FenFault::InvalidChar('0'));
    }

    #[test]
    fn test_rejects_bad_fields() {
        let placement = "8/8/8/8/8/8/8/8";
        assert!(matches!(fault(&format!("{placement} x")), FenFault::SideToMove(_)));
        assert!(matches!(fault(&format!("{placement} w KK")), FenFault::Castling(_)));
        assert!(matches!(fault(&format!("{placement} w KX")), FenFault::Castling(_)));
        assert!(matches!(fault(&format!("{placement} w - e9")), FenFault::EnPassant(_)));
        assert!(matches!(
            fault(&format!("{placement} w - - x 1")),
            FenFault::HalfMoveClock(_)
        ));
        assert!(matches!(
            fault(&format!("{placement} w - - -1 1")),
            FenFault::HalfMoveClock(_)
        ));
        assert!(matches!(
            fault(&format!("{placement} w - - 0 +1")),
            FenFault::FullMoveNumber(_)
        ));
        assert!(matches!(
            fault(&format!("{placement} w - - 0 1 extra")),
            FenFault::TooManyFields(7)
        ));
        assert_eq!(fault("   "), FenFault::Empty);
    }

    #[test]
    fn test_error_message() {
        let err = decode("8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed FEN \"8/8/8/8/8/8/8\": expected 8 ranks, found 7"
        );
    }
}
