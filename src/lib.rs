//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Drag-and-drop intake core.
pub mod intake;
/// Logging setup.
pub mod logging;
