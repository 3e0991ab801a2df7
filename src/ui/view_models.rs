//! View models for rendering the move list.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

/// Display data for one recorded turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveListEntry {
    /// Index of the turn in the history
    pub index: usize,
    pub move_num: u32,
    pub is_black: bool,
    /// Coordinate notation, e.g. `e2-e4`, `d4xe5`, `e7-e8=Q`
    pub text: String,
    /// The turn just applied (the one "previous move" would undo)
    pub is_current: bool,
    /// Beyond the cursor: taken back, still redoable
    pub is_undone: bool,
}

/// One row of the move list: a move number with up to two turns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveListRow {
    pub move_num: u32,
    pub white: Option<MoveListEntry>,
    pub black: Option<MoveListEntry>,
}
