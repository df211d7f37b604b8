//! Application controller bridging the intake core to the egui UI.

mod files;
mod hints;
mod intake;
mod settings;
mod status;
#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use intake::GestureFrame;

use crate::config::AppConfig;
use crate::egui_app::state::{SelectionState, UiState, ZoneState};
use crate::egui_app::ui::style::StatusTone;
use crate::intake::{FileHandle, IntakeWidget};

/// Maintains app state and bridges the intake widget to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    intake: Option<IntakeWidget<ZoneState, SelectionState>>,
    settings: AppConfig,
    /// Whether the previous frame had files hovering the drop zone; feeds
    /// gesture synthesis.
    hover_latch: bool,
}

impl EguiController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            intake: IntakeWidget::initialize(
                Some(ZoneState::default()),
                Some(SelectionState::default()),
            ),
            settings: AppConfig::default(),
            hover_latch: false,
        }
    }

    /// Highlight flag of the bound drop zone.
    pub fn zone_highlighted(&self) -> bool {
        self.intake
            .as_ref()
            .is_some_and(|widget| widget.zone().is_highlighted())
    }

    /// Staged file handles, in drop order.
    pub fn staged(&self) -> &[FileHandle] {
        self.intake
            .as_ref()
            .map(|widget| widget.control().files())
            .unwrap_or(&[])
    }

    /// Number of staged files.
    pub fn staged_len(&self) -> usize {
        self.staged().len()
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}
