use super::*;
use crate::egui_app::state::StatusBarState;
use crate::egui_app::ui::style;
use std::time::{Duration, Instant};

/// How long a non-idle banner stays up before reverting to the idle line.
pub(super) const BANNER_VISIBLE: Duration = Duration::from_secs(5);

impl EguiController {
    /// Show a status banner with a tone badge. Non-idle banners dismiss
    /// themselves after [`BANNER_VISIBLE`].
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.set_status_at(text, tone, Instant::now());
    }

    pub(crate) fn set_status_at(
        &mut self,
        text: impl Into<String>,
        tone: StatusTone,
        now: Instant,
    ) {
        let (label, color) = style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label.to_string();
        self.ui.status.badge_color = color;
        self.ui.status.expires_at = match tone {
            StatusTone::Idle => None,
            _ => Some(now + BANNER_VISIBLE),
        };
    }

    /// Revert an expired banner to the idle line.
    pub fn tick_status(&mut self, now: Instant) {
        if self
            .ui
            .status
            .expires_at
            .is_some_and(|expires_at| now >= expires_at)
        {
            self.ui.status = StatusBarState::idle();
        }
    }
}
