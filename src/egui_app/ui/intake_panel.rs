use super::EguiApp;
use super::style;
use eframe::egui::{self, Align2, RichText};

const ZONE_HEIGHT: f32 = 140.0;

impl EguiApp {
    pub(super) fn render_intake_panel(&mut self, ui: &mut egui::Ui) {
        self.render_drop_zone(ui);
        ui.add_space(10.0);
        self.render_selection_controls(ui);
        ui.add_space(6.0);
        self.render_staged_rows(ui);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let size = egui::vec2(ui.available_width(), ZONE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        self.zone_rect = Some(rect);

        let highlighted = self.controller.zone_highlighted();
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, style::zone_fill(highlighted));
        style::dashed_rect(painter, rect.shrink(6.0), style::zone_stroke(highlighted));
        let message = if highlighted {
            "Release to stage the files"
        } else {
            "Drop files here, or click to browse"
        };
        let font = egui::TextStyle::Heading.resolve(ui.style());
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            message,
            font,
            palette.text_primary,
        );

        let response = response.on_hover_text("Each drop replaces the staged selection");
        if response.clicked() {
            self.controller.browse_for_files();
        }
    }

    fn render_selection_controls(&mut self, ui: &mut egui::Ui) {
        let staged = self.controller.staged_len();
        ui.horizontal(|ui| {
            if ui
                .button("Browse…")
                .on_hover_text("Pick files with the system dialog")
                .clicked()
            {
                self.controller.browse_for_files();
            }
            let clear = ui
                .add_enabled(staged > 0, egui::Button::new("Clear"))
                .on_hover_text("Empty the staged selection");
            if clear.clicked() {
                self.controller.clear_selection();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let summary = match staged {
                    0 => "Nothing staged".to_string(),
                    1 => "1 file staged".to_string(),
                    n => format!("{n} files staged"),
                };
                ui.label(RichText::new(summary).color(style::palette().text_muted));
            });
        });
    }

    fn render_staged_rows(&mut self, ui: &mut egui::Ui) {
        let rows = self.controller.staged().to_vec();
        if rows.is_empty() {
            return;
        }
        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("staged_rows")
            .show(ui, |ui| {
                for (index, file) in rows.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let label = ui.label(&file.name);
                        match &file.path {
                            Some(path) => {
                                label.on_hover_text(path.display().to_string());
                            }
                            None => {
                                label.on_hover_text("No local path was provided for this file");
                            }
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .small_button("Show")
                                    .on_hover_text("Reveal in the file manager")
                                    .clicked()
                                {
                                    self.controller.reveal_staged(index);
                                }
                            },
                        );
                    });
                    ui.add_space(2.0);
                }
            });
    }
}
