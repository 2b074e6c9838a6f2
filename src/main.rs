mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::ClassroomApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Classroom",
        options,
        Box::new(|_cc| Ok(Box::new(ClassroomApp::new(config)))),
    )
}
