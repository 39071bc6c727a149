mod app;
mod bindings;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchDashboardApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A dataset that fails to load is fatal: no window is opened.
    let path = Path::new(config::DEFAULT_DATA_FILE);
    let dataset = data::loader::load_file(path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", path.display()))
        .with_context(|| format!("loading {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no launches", path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
