mod app;
mod color;
mod config;
mod data;
mod figure;
mod state;
mod ui;

use app::SpringViewerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let axes = match config::AxisConfig::load_or_default() {
        Ok(axes) => axes,
        Err(e) => {
            log::warn!("Using default axis configuration: {e}");
            config::AxisConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0])
            .with_min_inner_size([500.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "COSPIN Spring Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(SpringViewerApp::new(axes)))),
    )
}
