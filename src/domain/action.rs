//! Atomic board-mutation events and the turns that group them.
//!
//! Every action carries enough data to be undone on its own; resolving a
//! [`PieceId`] to a live piece is left to whoever applies the action.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chess::{PieceKind, Position};

/// Stable piece identity, derived from the square the piece started on
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PieceId(String);

impl PieceId {
    pub fn from_start(pos: Position) -> Self {
        Self(format!("{}-{}", pos.row, pos.col))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    Move {
        id: PieceId,
        from: Position,
        to: Position,
    },
    Take {
        id: PieceId,
        at: Position,
    },
    Transform {
        id: PieceId,
        from_kind: PieceKind,
        to_kind: PieceKind,
    },
    /// Last-move highlight change, `from_*` is the highlight being replaced
    UiHighlight {
        id: PieceId,
        from_from: Option<Position>,
        from_to: Option<Position>,
        to_from: Position,
        to_to: Position,
    },
}

impl Action {
    pub fn piece_id(&self) -> &PieceId {
        match self {
            Action::Move { id, .. }
            | Action::Take { id, .. }
            | Action::Transform { id, .. }
            | Action::UiHighlight { id, .. } => id,
        }
    }
}

/// Which way a turn is being crossed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The actions produced by one player interaction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub actions: Vec<Action>,
}

impl Turn {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Actions in application order: listed order going forward, reversed
    /// going backward.
    pub fn actions_in(&self, direction: Direction) -> Box<dyn Iterator<Item = &Action> + '_> {
        match direction {
            Direction::Forward => Box::new(self.actions.iter()),
            Direction::Backward => Box::new(self.actions.iter().rev()),
        }
    }

    /// The relocation this turn records, if any
    pub fn relocation(&self) -> Option<(Position, Position)> {
        self.actions.iter().find_map(|a| match a {
            Action::Move { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn has_capture(&self) -> bool {
        self.actions.iter().any(|a| matches!(a, Action::Take { .. }))
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.actions.iter().find_map(|a| match a {
            Action::Transform { to_kind, .. } => Some(*to_kind),
            _ => None,
        })
    }
}
