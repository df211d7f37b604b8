//! Shared state types for the egui UI.

mod intake;

pub use intake::{SelectionState, ZoneState};

use crate::egui_app::ui::style;
use egui::Color32;
use std::time::Instant;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub hints: HintOverlayState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            hints: HintOverlayState::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
    /// When set, the banner reverts to the idle line at this instant.
    pub expires_at: Option<Instant>,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Drop files onto the tray to stage them".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
            expires_at: None,
        }
    }
}

/// Visibility and persistence flags for the startup tips overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct HintOverlayState {
    /// Overlay is currently shown.
    pub open: bool,
    /// Persisted "show on launch" preference.
    pub show_on_startup: bool,
}
