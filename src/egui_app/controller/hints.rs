use super::*;

impl EguiController {
    /// Reopen the startup tips overlay.
    pub fn show_hints(&mut self) {
        self.ui.hints.open = true;
    }

    /// Close the startup tips overlay.
    pub fn dismiss_hints(&mut self) {
        self.ui.hints.open = false;
    }

    /// Persist whether the tips overlay opens on launch.
    pub fn set_hints_on_startup(&mut self, show: bool) {
        self.ui.hints.show_on_startup = show;
        self.settings.hints.show_on_startup = show;
        self.persist_config("Failed to save the tips preference");
    }
}
