//! Display generation for the move list.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{PieceColor, Turn};
use crate::models::GameModel;
use crate::ui::view_models::{MoveListEntry, MoveListRow};

/// Coordinate notation for a turn, `None` when it relocated nothing
pub fn turn_text(turn: &Turn) -> Option<String> {
    let (from, to) = turn.relocation()?;
    let sep = if turn.has_capture() { 'x' } else { '-' };
    let mut text = format!("{from}{sep}{to}");
    if let Some(kind) = turn.promotion() {
        text.push('=');
        text.push(kind.letter().to_ascii_uppercase());
    }
    Some(text)
}

/// One entry per recorded turn, numbered from the game's start position
pub fn move_list(game: &GameModel) -> Vec<MoveListEntry> {
    let history = game.history();
    let first_move = game.board().full_move_number;
    let offset = match game.start_side() {
        PieceColor::White => 0,
        PieceColor::Black => 1,
    };

    history
        .turns()
        .iter()
        .enumerate()
        .filter_map(|(index, turn)| {
            let text = turn_text(turn)?;
            let ply = (index + offset) as u32;
            Some(MoveListEntry {
                index,
                move_num: first_move + ply / 2,
                is_black: ply % 2 == 1,
                text,
                is_current: index + 1 == history.cursor(),
                is_undone: index >= history.cursor(),
            })
        })
        .collect()
}

/// Pair entries into numbered rows, white first
pub fn move_rows(entries: Vec<MoveListEntry>) -> Vec<MoveListRow> {
    let mut rows: Vec<MoveListRow> = Vec::new();
    for entry in entries {
        let pairs_with_last = |row: &&mut MoveListRow| {
            entry.is_black && row.move_num == entry.move_num && row.black.is_none()
        };
        if let Some(row) = rows.last_mut().filter(pairs_with_last) {
            row.black = Some(entry);
            continue;
        }
        let move_num = entry.move_num;
        let (white, black) = if entry.is_black {
            (None, Some(entry))
        } else {
            (Some(entry), None)
        };
        rows.push(MoveListRow {
            move_num,
            white,
            black,
        });
    }
    rows
}
