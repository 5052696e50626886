#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod paint_canvas;

use app::KinetixApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("Kinetix"),
        ..Default::default()
    };

    eframe::run_native(
        "Kinetix",
        options,
        Box::new(|cc| Ok(Box::new(KinetixApp::new(cc)))),
    )
}
