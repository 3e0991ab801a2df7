//! Chess board view - the main board with drag-and-drop piece movement.

use gpui::{
    App, Context, Entity, FocusHandle, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent,
    Pixels, Subscription, Window, actions, canvas, div, img, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::domain::{Piece, Position};
use crate::models::{GameModel, MoveOutcome, SoundCue, TurnEffect};
use crate::ui::{BoardLayout, SoundPlayer};
use crate::ui::assets::piece_svg;
use crate::ui::components::{SquareState, render_promotion_picker, render_square};
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::render_move_list_panel;

actions!(chessboard, [PreviousMove, NextMove, NewGame]);

/// Key context the navigation bindings are registered under
pub const KEY_CONTEXT: &str = "ChessBoard";

/// Play the sound cue for an applied turn, if sound is on
pub fn announce(game: &GameModel, effect: &TurnEffect, cx: &App) {
    if !game.settings.sound {
        return;
    }
    let Some(cue) = SoundCue::for_effect(effect) else {
        return;
    };
    tracing::debug!(asset = cue.asset_path(), "sound cue");
    if let Some(player) = cx.try_global::<SoundPlayer>() {
        player.play(cue);
    }
}

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    layout: BoardLayout,
    pub focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let mut layout = BoardLayout::default();
        layout.piece_scale = model.read(cx).settings.piece_scale;
        Self {
            model,
            layout,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    fn previous_move(&mut self, _: &PreviousMove, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| {
            if let Some(effect) = game.previous_move() {
                announce(game, &effect, cx);
                cx.notify();
            }
        });
    }

    fn next_move(&mut self, _: &NextMove, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| {
            if let Some(effect) = game.next_move() {
                announce(game, &effect, cx);
                cx.notify();
            }
        });
    }

    fn new_game(&mut self, _: &NewGame, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| {
            game.restart();
            cx.notify();
        });
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model = self.model.clone();
        let model_down = model.clone();
        let model_move = model.clone();
        let model_up = model.clone();
        let model_promote = model.clone();
        let view_measure = cx.entity();
        let layout = self.layout;

        let game = self.model.read(cx);
        let drag_state = game.drag_state.clone();
        let highlight = game.highlight();
        let hover = drag_state.as_ref().and_then(|d| d.hover);

        // Sizing based on measured panel dimensions
        let square_size = layout.square_size();
        let piece_size = layout.piece_size();

        // Floating piece follows cursor during drag
        let floating_piece = drag_state.as_ref().and_then(|d| {
            let piece = game.piece_at(d.from)?;
            Some(
                div()
                    .absolute()
                    .left(px(d.mouse_x - piece_size / 2.0))
                    .top(px(d.mouse_y - piece_size / 2.0))
                    .size(px(piece_size))
                    .child(
                        img(piece_svg(Piece::new(piece.kind, piece.color))).size(px(piece_size)),
                    ),
            )
        });

        // Promotion picker over the board while a choice is pending
        let promotion_picker = game.pending_promotion().map(|pending| {
            let picker = render_promotion_picker(pending.color, square_size, move |choice, cx| {
                model_promote.update(cx, |game, cx| {
                    if let Some(effect) = game.end_promotion(choice) {
                        announce(game, &effect, cx);
                    }
                    cx.notify();
                });
            });
            div()
                .absolute()
                .top(px(BOARD_PADDING))
                .left(px(BOARD_PADDING + layout.board_total_size() + 8.0))
                .child(picker)
        });

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board_total_size = layout.board_total_size();

        // Collect squares for rendering (can't borrow game in closure)
        let squares: Vec<SquareState> = (0..8)
            .flat_map(|row| {
                (0..8).map(move |col| {
                    let pos = Position { row, col };
                    let piece = game.piece_at(pos);
                    SquareState {
                        row,
                        col,
                        piece: piece.map(|p| Piece::new(p.kind, p.color)),
                        is_being_dragged: piece.is_some_and(|p| p.is_dragging),
                        is_last_move: highlight.is_some_and(|h| h.from == pos || h.to == pos),
                        is_hovered: hover == Some(pos),
                    }
                })
            })
            .collect();
        let settings = game.settings.clone();

        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children((0..8).map(|row| {
                div().flex().flex_shrink_0().children((0..8).map(|col| {
                    render_square(squares[row * 8 + col], &settings, square_size, piece_size)
                }))
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .when_some(floating_piece, |el, fp| el.child(fp))
            .when_some(promotion_picker, |el, picker| el.child(picker))
            // Mouse down: start drag if clicking on a movable piece
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, cx| {
                        let (x, y) = (ev.position.x.into(), ev.position.y.into());
                        if let Some(square) = layout.pos_to_square(x, y) {
                            if game.grab(square, x, y) {
                                cx.notify();
                            }
                        }
                    });
                },
            )
            // Mouse move: update drag position and hovered square
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |game, cx| {
                    if game.drag_state.is_some() {
                        let (x, y) = (ev.position.x.into(), ev.position.y.into());
                        game.drag_to(x, y, layout.pos_to_square(x, y));
                        cx.notify();
                    }
                });
            })
            // Mouse up: complete the move
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |game, cx| {
                    if game.drag_state.is_none() {
                        return;
                    }
                    let square = layout.pos_to_square(ev.position.x.into(), ev.position.y.into());
                    match game.release(square) {
                        MoveOutcome::Ignored => {}
                        MoveOutcome::Committed(effect) | MoveOutcome::PromotionPending(effect) => {
                            announce(game, &effect, cx);
                        }
                    }
                    cx.notify();
                });
            });

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view_measure.update(cx, |view, cx| {
                    let width: f32 = bounds.size.width.into();
                    let height: f32 = bounds.size.height.into();
                    if view.layout.panel_width != width || view.layout.panel_height != height {
                        view.layout.panel_width = width;
                        view.layout.panel_height = height;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        // Move list panel
        let move_list_panel_content = render_move_list_panel(&model, cx);

        // Main resizable layout
        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .key_context(KEY_CONTEXT)
            .on_action(cx.listener(Self::previous_move))
            .on_action(cx.listener(Self::next_move))
            .on_action(cx.listener(Self::new_game))
            .child(
                h_resizable("chess-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1200.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(150.)..Pixels::MAX)
                            .child(move_list_panel_content),
                    ),
            )
    }
}
