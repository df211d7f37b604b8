use super::EguiApp;
use super::style;
use crate::egui_app::hints;
use eframe::egui::{self, Align2, RichText};

impl EguiApp {
    pub(super) fn render_hints_overlay(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.hints.open {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.dismiss_hints();
            return;
        }

        let mut open = true;
        egui::Window::new("Getting started")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_hints_body(ui);
            });

        if !open {
            self.controller.dismiss_hints();
        }
    }

    fn render_hints_body(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.set_min_width(420.0);
        for tip in hints::HINTS {
            ui.label(RichText::new(tip.title).strong().color(palette.text_primary));
            ui.label(RichText::new(tip.body).color(palette.text_muted));
            ui.add_space(8.0);
        }

        let mut show_on_startup = self.controller.ui.hints.show_on_startup;
        if ui
            .checkbox(&mut show_on_startup, "Show these tips on launch")
            .changed()
        {
            self.controller.set_hints_on_startup(show_on_startup);
        }
        ui.add_space(8.0);
        if ui.button("Close").clicked() {
            self.controller.dismiss_hints();
        }
    }
}
