mod app;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::HappinessApp;
use eframe::egui;
use happiness_dashboard::config::DashboardConfig;
use happiness_dashboard::data::loader;
use happiness_dashboard::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!("Starting with {config:?}");

    // Without its dataset the dashboard has nothing to show.
    let dataset = loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))
        .inspect_err(|e| log::error!("Failed to load dataset: {e:#}"))?;

    let state = AppState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "World Happiness Report 2021",
        options,
        Box::new(|_cc| Ok(Box::new(HappinessApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
