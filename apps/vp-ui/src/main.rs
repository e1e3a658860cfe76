#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod fonts;
mod theme;

use app::ViolinApp;

const WINDOW_TITLE: &str = "Violin Plotter";
const WINDOW_SIZE: [f32; 2] = [900.0, 700.0];

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ViolinApp::new(cc)))),
    )
}
