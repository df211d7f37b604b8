use super::*;
use crate::config::AppConfig;
use crate::egui_app::state::UiState;

pub(super) fn controller() -> EguiController {
    EguiController::new()
}

/// A controller whose intake widget never bound; every gesture must be a
/// quiet no-op.
pub(super) fn detached_controller() -> EguiController {
    EguiController {
        ui: UiState::default(),
        intake: None,
        settings: AppConfig::default(),
        hover_latch: false,
    }
}

pub(super) fn hover_frame() -> GestureFrame {
    GestureFrame {
        hovering: true,
        drop: None,
    }
}

pub(super) fn idle_frame() -> GestureFrame {
    GestureFrame::default()
}

pub(super) fn drop_frame(names: &[&str]) -> GestureFrame {
    GestureFrame {
        hovering: false,
        drop: Some(
            names
                .iter()
                .map(|name| FileHandle {
                    name: (*name).into(),
                    path: None,
                })
                .collect(),
        ),
    }
}
