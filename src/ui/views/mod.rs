mod board_view;
mod move_list;

pub use board_view::{ChessBoardView, KEY_CONTEXT, NewGame, NextMove, PreviousMove, announce};
pub use move_list::render_move_list_panel;
