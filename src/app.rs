//! Application setup and window creation.

use gpui::{App, Bounds, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::models::GameModel;
use crate::settings::Settings;
use crate::ui::{FileAssets, SoundPlayer};
use crate::ui::views::{ChessBoardView, KEY_CONTEXT, NewGame, NextMove, PreviousMove};

/// Initialize and run the chess application
pub fn run(settings: Settings, cx: &mut App) -> anyhow::Result<()> {
    gpui_component::init(cx);

    cx.bind_keys([
        KeyBinding::new("left", PreviousMove, Some(KEY_CONTEXT)),
        KeyBinding::new("right", NextMove, Some(KEY_CONTEXT)),
        KeyBinding::new("ctrl-n", NewGame, Some(KEY_CONTEXT)),
    ]);

    if settings.sound {
        match SoundPlayer::spawn(&FileAssets::new()) {
            Ok(player) => cx.set_global(player),
            Err(err) => tracing::warn!("sound disabled: {err:#}"),
        }
    }

    // Create the game model
    let model = cx.new(|_| GameModel::new(settings));

    let bounds = Bounds::centered(None, size(px(900.0), px(600.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            window.focus(&view.read(cx).focus_handle);
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
