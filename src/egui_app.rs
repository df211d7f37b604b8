//! egui application: controller, state, and renderer.

/// Application controller bridging the intake core to the UI.
pub mod controller;
/// Static usage tips shown in the startup overlay.
pub mod hints;
/// Render-facing state types.
pub mod state;
/// egui renderer.
pub mod ui;
