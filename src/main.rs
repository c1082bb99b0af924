mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::HousingDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();

    // The dataset is read once here and owned by the app for its lifetime.
    let loaded = data::loader::load(&config.data_path);
    if let Err(e) = &loaded {
        log::error!("Failed to load housing data: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(HousingDashboardApp::new(loaded, config)))),
    )
}
