mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // A missing or malformed data file is fatal: there is nothing to show.
    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", config.data_path.display());
            return Err(e.context(format!("loading {}", config.data_path.display())));
        }
    };
    log::info!(
        "Loaded {} launches from {} (payload {} to {} kg, sites {:?})",
        dataset.len(),
        config.data_path.display(),
        dataset.payload_min,
        dataset.payload_max,
        dataset.sites
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        config::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(AppState::new(dataset, config))))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
