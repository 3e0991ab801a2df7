use gpui::{App, Application};
use gpui_chessboard::Settings;
use gpui_chessboard::ui::FileAssets;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::args().any(|arg| arg == "--print-settings-schema") {
        println!("{}", Settings::schema_json()?);
        return Ok(());
    }

    let settings = Settings::from_env();
    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| {
            if let Err(err) = gpui_chessboard::app::run(settings, cx) {
                tracing::error!("failed to open window: {err:#}");
                cx.quit();
            }
        });
    Ok(())
}
