//! Linear turn history with an undo/redo cursor.
//!
//! This is a pure domain module with no GPUI dependencies.

use super::action::Turn;

/// Ordered turns plus a cursor counting how many of them are applied.
///
/// Appending after stepping back discards the turns beyond the cursor.
#[derive(Clone, Debug, Default)]
pub struct History {
    logs: Vec<Turn>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed turn, dropping any redo branch
    pub fn append(&mut self, turn: Turn) {
        self.logs.truncate(self.cursor);
        self.logs.push(turn);
        self.cursor = self.logs.len();
    }

    /// Re-apply the next turn. `None` when already at the head.
    pub fn step_forward(&mut self) -> Option<&Turn> {
        let turn = self.logs.get(self.cursor)?;
        self.cursor += 1;
        Some(turn)
    }

    /// Take back the last applied turn. `None` when nothing is applied.
    pub fn step_backward(&mut self) -> Option<&Turn> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.logs.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_head(&self) -> bool {
        self.cursor == self.logs.len()
    }

    /// All recorded turns, including the redo branch
    pub fn turns(&self) -> &[Turn] {
        &self.logs
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::{Action, PieceId};
    use crate::domain::chess::Position;

    fn turn(tag: usize) -> Turn {
        let from = Position { row: 6, col: tag };
        let to = Position { row: 5, col: tag };
        Turn::new(vec![Action::Move {
            id: PieceId::from_start(from),
            from,
            to,
        }])
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.is_at_start());
        assert!(history.is_at_head());
    }

    #[test]
    fn test_append_moves_cursor() {
        let mut history = History::new();
        history.append(turn(1));
        history.append(turn(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_navigation() {
        let mut history = History::new();
        history.append(turn(1));
        history.append(turn(2));

        assert_eq!(history.step_backward(), Some(&turn(2)));
        assert_eq!(history.step_backward(), Some(&turn(1)));
        assert_eq!(history.step_backward(), None); // nothing left to undo
        assert_eq!(history.cursor(), 0);

        assert_eq!(history.step_forward(), Some(&turn(1)));
        assert_eq!(history.step_forward(), Some(&turn(2)));
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_append_discards_redo_branch() {
        let mut history = History::new();
        history.append(turn(1));
        history.append(turn(2));
        assert_eq!(history.step_backward(), Some(&turn(2)));

        history.append(turn(3));
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.turns(), &[turn(1), turn(3)]);

        assert_eq!(history.step_backward(), Some(&turn(3)));
        assert_eq!(history.step_backward(), Some(&turn(1)));
    }

    #[test]
    fn test_empty_history_saturates() {
        let mut history = History::new();
        assert_eq!(history.step_backward(), None);
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut history = History::new();
        history.append(turn(0));
        for _ in 0..3 {
            history.step_backward();
            assert!(history.cursor() <= history.len());
        }
        for _ in 0..3 {
            history.step_forward();
            assert!(history.cursor() <= history.len());
        }
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append(turn(0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.step_backward(), None);
    }
}
