//! Promotion picker: the four promotion pieces and a cancel button.

use gpui::{App, Div, SharedString, div, prelude::*, px, rgb};

use crate::domain::{Piece, PieceColor};
use crate::models::PromotionChoice;
use crate::ui::assets::piece_svg;
use crate::ui::theme::{BORDER_COLOR, PROMOTION_BG, TEXT_PRIMARY};

/// Render the picker for `color`; `on_pick` receives the chosen option
pub fn render_promotion_picker(
    color: PieceColor,
    button_size: f32,
    on_pick: impl Fn(PromotionChoice, &mut App) + Clone + 'static,
) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .p_2()
        .bg(rgb(PROMOTION_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .children(PromotionChoice::ALL.into_iter().map(|choice| {
            let on_pick = on_pick.clone();
            let button = div()
                .id(SharedString::from(format!("promote-{choice:?}")))
                .flex()
                .items_center()
                .justify_center()
                .w(px(button_size))
                .rounded(px(5.0))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(BORDER_COLOR)))
                .on_click(move |_ev, _window, cx| on_pick(choice, cx));
            match choice.kind() {
                Some(kind) => button
                    .h(px(button_size))
                    .child(gpui::img(piece_svg(Piece::new(kind, color))).size(px(button_size))),
                None => button
                    .h(px(button_size * 0.4))
                    .text_color(rgb(TEXT_PRIMARY))
                    .child("x"),
            }
        }))
}
