//! Move list panel - displays the recorded turns and the navigation buttons.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};

use crate::models::GameModel;
use crate::ui::display::{move_list, move_rows};
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::MoveListEntry;
use crate::ui::views::announce;

// Colors for move highlighting
const MOVE_SELECTED_BG: u32 = 0x4a6da7;
const NAV_BUTTON_BG: u32 = 0x3a3a3a;
const NAV_BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const NAV_BUTTON_DISABLED: u32 = 0x555555;

/// Render the move list panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(model: &Entity<GameModel>, cx: &App) -> Div {
    let game = model.read(cx);
    let rows = move_rows(move_list(game));
    let can_go_back = game.can_go_back();
    let can_go_forward = game.can_go_forward();

    // Clone model for navigation closures
    let model_back = model.clone();
    let model_forward = model.clone();
    let model_new = model.clone();

    let moves_content = if rows.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div().flex().flex_col().gap_1().children(rows.into_iter().map(|row| {
            div()
                .flex()
                .items_center()
                .gap_2()
                .py_1()
                .child(
                    div()
                        .text_color(rgb(TEXT_SECONDARY))
                        .text_sm()
                        .w(px(40.0))
                        .child(format!("{}.", row.move_num)),
                )
                .child(render_entry(row.white, "..."))
                .child(render_entry(row.black, ""))
        }))
    };

    let move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
        // Navigation buttons at bottom
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_nav_button("<", can_go_back, move |cx| {
                    model_back.update(cx, |game, cx| {
                        if let Some(effect) = game.previous_move() {
                            announce(game, &effect, cx);
                        }
                        cx.notify();
                    });
                }))
                .child(render_nav_button(">", can_go_forward, move |cx| {
                    model_forward.update(cx, |game, cx| {
                        if let Some(effect) = game.next_move() {
                            announce(game, &effect, cx);
                        }
                        cx.notify();
                    });
                }))
                .child(render_nav_button("+", true, move |cx| {
                    model_new.update(cx, |game, cx| {
                        game.restart();
                        cx.notify();
                    });
                })),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(move_list)
}

fn render_entry(entry: Option<MoveListEntry>, placeholder: &'static str) -> Div {
    let Some(entry) = entry else {
        return div()
            .flex_1()
            .text_sm()
            .text_color(rgb(TEXT_SECONDARY))
            .child(placeholder);
    };
    div()
        .flex_1()
        .px_1()
        .rounded(px(3.0))
        .text_sm()
        .text_color(if entry.is_undone {
            rgb(TEXT_SECONDARY)
        } else {
            rgb(TEXT_PRIMARY)
        })
        .when(entry.is_current, |el| el.bg(rgb(MOVE_SELECTED_BG)))
        .child(entry.text)
}

/// Render a navigation button (back/forward/new game)
fn render_nav_button(
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("nav-{}", label)))
        .px_4()
        .py_2()
        .rounded(px(4.0))
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(NAV_BUTTON_DISABLED)
        })
        .font_weight(gpui::FontWeight::BOLD)
        .when(enabled, |el| {
            el.bg(rgb(NAV_BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(NAV_BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(PANEL_BG)))
        .child(label)
}
