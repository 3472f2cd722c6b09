// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use ranking_ui::gui;

fn app_icon() -> IconData {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/ranking.png"
    )))
    .unwrap()
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
