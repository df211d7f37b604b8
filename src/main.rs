//! Entry point for the droptray desktop tray.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use droptray::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use droptray::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(520.0, 460.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Droptray",
        native_options,
        Box::new(|_cc| Ok(Box::new(EguiApp::new()))),
    )?;
    Ok(())
}
