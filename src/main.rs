mod app;
mod config;
mod error;
mod geometry;
mod report;
mod session;
mod util;

use app::SecantApp;
use config::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = AppConfig::load();
    let side = config.canvas_side();
    log::info!("secant v{} starting", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 340.0, side + 80.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Secant: circle and segment intersections",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SecantApp::new(config)))),
    )
}
