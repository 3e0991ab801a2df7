//! Square rendering component.

use crate::domain::Piece;
use crate::settings::Settings;
use crate::ui::assets::piece_svg;
use crate::ui::components::render_piece;
use crate::ui::theme::{GHOST_OPACITY, is_light_square};
use gpui::{div, img, prelude::*, px, rgb};

/// Everything a square needs to know to paint itself
#[derive(Clone, Copy, Debug)]
pub struct SquareState {
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    pub is_being_dragged: bool,
    pub is_last_move: bool,
    pub is_hovered: bool,
}

fn square_color(state: &SquareState, settings: &Settings) -> u32 {
    match (is_light_square(state.row, state.col), state.is_last_move) {
        (true, false) => settings.light_square,
        (false, false) => settings.dark_square,
        (true, true) => settings.light_moved,
        (false, true) => settings.dark_moved,
    }
}

/// Render a single board square with optional piece
pub fn render_square(
    state: SquareState,
    settings: &Settings,
    square_size: f32,
    piece_size: f32,
) -> impl IntoElement {
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(rgb(square_color(&state, settings)))
        .when(state.is_hovered, |el| {
            el.border_4().border_color(rgb(settings.hover_border))
        })
        .flex()
        .items_center()
        .justify_center()
        .when_some(state.piece, |el, p| {
            if state.is_being_dragged {
                // ghost piece on original square
                el.child(
                    div()
                        .size_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .opacity(GHOST_OPACITY)
                        .child(img(piece_svg(p)).size(px(piece_size))),
                )
            } else {
                el.child(render_piece(p, piece_size))
            }
        })
}
