//! Live piece instances and the application of actions against them.

use crate::domain::{
    Action, Board, Cell, Direction, Piece, PieceColor, PieceId, PieceKind, Position, Turn,
};

/// A piece on screen. Identity is the square it started the game on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceInstance {
    pub id: PieceId,
    pub position: Position,
    pub alive: bool,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub is_dragging: bool,
    pub can_move: bool,
}

/// The last-move highlight: origin and destination squares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub from: Position,
    pub to: Position,
}

/// What applying a turn did, for sound cues and repainting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnEffect {
    pub moved: bool,
    pub captured: bool,
    /// Highlight after the turn, when the turn changed it
    pub highlight: Option<Option<Highlight>>,
}

#[derive(Clone, Debug, Default)]
pub struct PieceSet {
    pieces: Vec<PieceInstance>,
}

impl PieceSet {
    /// One instance per occupied cell, movable if its side is to move
    pub fn from_board(board: &Board) -> Self {
        let mut pieces = Vec::new();
        for (row, cells) in board.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(piece) = cell else { continue };
                let position = Position { row, col };
                pieces.push(PieceInstance {
                    id: PieceId::from_start(position),
                    position,
                    alive: true,
                    kind: piece.kind,
                    color: piece.color,
                    is_dragging: false,
                    can_move: piece.color == board.side_to_move,
                });
            }
        }
        Self { pieces }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PieceInstance> {
        self.pieces.iter()
    }

    pub fn get(&self, id: &PieceId) -> Option<&PieceInstance> {
        self.pieces.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &PieceId) -> Option<&mut PieceInstance> {
        self.pieces.iter_mut().find(|p| &p.id == id)
    }

    pub fn alive_at(&self, pos: Position) -> Option<&PieceInstance> {
        self.pieces.iter().find(|p| p.alive && p.position == pos)
    }

    pub fn alive_at_mut(&mut self, pos: Position) -> Option<&mut PieceInstance> {
        self.pieces.iter_mut().find(|p| p.alive && p.position == pos)
    }

    pub fn set_dragging(&mut self, id: Option<&PieceId>) {
        for piece in &mut self.pieces {
            piece.is_dragging = Some(&piece.id) == id;
        }
    }

    /// Only the side to move may grab pieces; `frozen` locks everyone
    pub fn refresh_mobility(&mut self, side_to_move: PieceColor, frozen: bool) {
        for piece in &mut self.pieces {
            piece.can_move = !frozen && piece.alive && piece.color == side_to_move;
        }
    }

    /// Apply every action of `turn` in `direction` order.
    ///
    /// Actions naming an unknown piece are skipped. Taking back a turn
    /// never reports a capture.
    pub fn apply_turn(&mut self, turn: &Turn, direction: Direction) -> TurnEffect {
        let mut effect = TurnEffect::default();
        for action in turn.actions_in(direction) {
            self.apply(action, direction, &mut effect);
        }
        effect
    }

    fn apply(&mut self, action: &Action, direction: Direction, effect: &mut TurnEffect) {
        let Some(piece) = self.get_mut(action.piece_id()) else {
            tracing::warn!(id = %action.piece_id(), "action names an unknown piece");
            return;
        };
        let forward = direction == Direction::Forward;
        match action {
            Action::Move { from, to, .. } => {
                piece.position = if forward { *to } else { *from };
                effect.moved = true;
            }
            Action::Take { at, .. } => {
                piece.alive = !forward;
                piece.position = *at;
                effect.captured |= forward;
            }
            Action::Transform {
                from_kind, to_kind, ..
            } => {
                piece.kind = if forward { *to_kind } else { *from_kind };
            }
            Action::UiHighlight {
                from_from,
                from_to,
                to_from,
                to_to,
                ..
            } => {
                effect.highlight = Some(if forward {
                    Some(Highlight {
                        from: *to_from,
                        to: *to_to,
                    })
                } else {
                    from_from
                        .zip(*from_to)
                        .map(|(from, to)| Highlight { from, to })
                });
            }
        }
    }

    /// Placement grid rebuilt from the alive pieces
    pub fn to_grid(&self) -> [[Cell; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for piece in self.pieces.iter().filter(|p| p.alive) {
            grid[piece.position.row][piece.position.col] = Some(Piece::new(piece.kind, piece.color));
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decode;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    fn snapshot(set: &PieceSet) -> Vec<PieceInstance> {
        set.iter().cloned().collect()
    }

    #[test]
    fn test_from_board_ids_and_mobility() {
        let board = decode("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
        let set = PieceSet::from_board(&board);
        assert_eq!(set.iter().count(), 3);
        let pawn = set.alive_at(pos(6, 4)).unwrap();
        assert_eq!(pawn.id.as_str(), "6-4");
        assert!(!pawn.can_move);
        assert!(set.alive_at(pos(0, 4)).unwrap().can_move);
    }

    #[test]
    fn test_capture_turn_reverses_exactly() {
        // P sits on (3,4), Q captures it from (2,4)
        let board = decode("8/8/4q3/4P3/8/8/8/8").unwrap();
        let mut set = PieceSet::from_board(&board);
        let before = snapshot(&set);
        let p = PieceId::from_start(pos(3, 4));
        let q = PieceId::from_start(pos(2, 4));
        let turn = Turn::new(vec![
            Action::Take {
                id: p.clone(),
                at: pos(3, 4),
            },
            Action::Move {
                id: q.clone(),
                from: pos(2, 4),
                to: pos(3, 4),
            },
        ]);

        let effect = set.apply_turn(&turn, Direction::Forward);
        assert!(effect.moved && effect.captured);
        assert!(!set.get(&p).unwrap().alive);
        assert_eq!(set.alive_at(pos(3, 4)).unwrap().id, q);

        let effect = set.apply_turn(&turn, Direction::Backward);
        assert!(effect.moved && !effect.captured);
        assert_eq!(snapshot(&set), before);
    }

    #[test]
    fn test_promotion_turn_reverses_kind_and_square() {
        let board = decode("8/4P3/8/8/8/8/8/8").unwrap();
        let mut set = PieceSet::from_board(&board);
        let id = PieceId::from_start(pos(1, 4));
        let turn = Turn::new(vec![
            Action::Move {
                id: id.clone(),
                from: pos(1, 4),
                to: pos(0, 4),
            },
            Action::Transform {
                id: id.clone(),
                from_kind: PieceKind::Pawn,
                to_kind: PieceKind::Queen,
            },
        ]);

        set.apply_turn(&turn, Direction::Forward);
        assert_eq!(set.get(&id).unwrap().kind, PieceKind::Queen);

        set.apply_turn(&turn, Direction::Backward);
        let pawn = set.get(&id).unwrap();
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(pawn.position, pos(1, 4));
    }

    #[test]
    fn test_highlight_forward_and_back() {
        let board = decode("8/8/8/8/8/8/4P3/8").unwrap();
        let mut set = PieceSet::from_board(&board);
        let turn = Turn::new(vec![Action::UiHighlight {
            id: PieceId::from_start(pos(6, 4)),
            from_from: None,
            from_to: None,
            to_from: pos(6, 4),
            to_to: pos(4, 4),
        }]);
        let forward = set.apply_turn(&turn, Direction::Forward);
        assert_eq!(
            forward.highlight,
            Some(Some(Highlight {
                from: pos(6, 4),
                to: pos(4, 4)
            }))
        );
        assert!(!forward.moved);
        let backward = set.apply_turn(&turn, Direction::Backward);
        assert_eq!(backward.highlight, Some(None));
    }

    #[test]
    fn test_unknown_piece_is_skipped() {
        let board = decode("8/8/8/8/8/8/8/8").unwrap();
        let mut set = PieceSet::from_board(&board);
        let turn = Turn::new(vec![Action::Take {
            id: PieceId::from_start(pos(0, 0)),
            at: pos(0, 0),
        }]);
        assert_eq!(set.apply_turn(&turn, Direction::Forward), TurnEffect::default());
    }

    #[test]
    fn test_to_grid_skips_dead_pieces() {
        let board = decode("8/8/8/8/8/8/8/rR6").unwrap();
        let mut set = PieceSet::from_board(&board);
        let black = PieceId::from_start(pos(7, 0));
        set.apply_turn(
            &Turn::new(vec![Action::Take {
                id: black,
                at: pos(7, 0),
            }]),
            Direction::Forward,
        );
        let grid = set.to_grid();
        assert_eq!(grid[7][0], None);
        assert!(grid[7][1].is_some());
    }
}
