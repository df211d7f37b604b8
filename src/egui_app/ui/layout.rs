use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    pub(super) fn render_panels(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_intake_panel(ui);
        });
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Droptray").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        if ui
                            .button("Tips")
                            .on_hover_text("Reopen the getting-started tips")
                            .clicked()
                        {
                            self.controller.show_hints();
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = self.controller.ui.status.clone();
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(6.0, 10.0),
                    6.0,
                    status.badge_color,
                );
                ui.add_space(16.0);
                ui.label(RichText::new(&status.badge_label).strong());
                ui.separator();
                ui.label(&status.text);
            });
        });
    }
}
