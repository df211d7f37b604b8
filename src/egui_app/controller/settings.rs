use super::*;
use crate::config::{self, ConfigError};
use tracing::warn;

impl EguiController {
    /// Load persisted settings and seed the UI state they drive.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let cfg = config::load_or_default()?;
        self.ui.hints.show_on_startup = cfg.hints.show_on_startup;
        self.ui.hints.open = cfg.hints.show_on_startup;
        self.settings = cfg;
        Ok(())
    }

    /// Persist the current settings, reporting a banner on failure.
    pub(super) fn persist_config(&mut self, error_prefix: &str) {
        if let Err(err) = config::save(&self.settings) {
            warn!("{error_prefix}: {err}");
            self.set_status(format!("{error_prefix}: {err}"), StatusTone::Warning);
        }
    }
}
