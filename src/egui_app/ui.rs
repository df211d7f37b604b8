//! egui renderer for the droptray UI.

mod gestures;
mod hints;
mod intake_panel;
mod layout;
/// Palette, visuals, and status tones shared with the controller.
pub mod style;
mod update;

use crate::egui_app::controller::EguiController;
use crate::egui_app::ui::style::StatusTone;
use eframe::egui;

/// Smallest window the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 360.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Drop-zone rectangle from the last painted frame; gesture capture
    /// hit-tests against it.
    zone_rect: Option<egui::Rect>,
    /// Latched when files hover the zone, so a release that arrives
    /// without a pointer position still lands on the zone.
    zone_drop_armed: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    ///
    /// A failed load keeps defaults and surfaces the error as a banner
    /// rather than aborting startup.
    pub fn new() -> Self {
        let mut controller = EguiController::new();
        if let Err(err) = controller.load_configuration() {
            controller.set_status(format!("Failed to load settings: {err}"), StatusTone::Error);
        }
        Self {
            controller,
            visuals_set: false,
            zone_rect: None,
            zone_drop_armed: false,
        }
    }
}

impl Default for EguiApp {
    fn default() -> Self {
        Self::new()
    }
}
