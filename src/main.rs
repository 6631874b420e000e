use anyhow::Result;

use subdivision_rms::app::App;
use subdivision_rms::config::{default_data_dir, ensure_webview_data_dir};
use subdivision_rms::logging::init_logging;

fn main() -> Result<()> {
    init_logging();

    let webview_data_dir = ensure_webview_data_dir(&default_data_dir()?)?;
    tracing::info!(webview = %webview_data_dir.display(), "starting desktop app");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Subdivision Records"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
    Ok(())
}
