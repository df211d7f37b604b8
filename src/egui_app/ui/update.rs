use super::EguiApp;
use eframe::egui;
use std::time::Instant;

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.prepare_frame(ctx);
        let gesture = self.collect_gesture_frame(ctx);
        self.controller.apply_gesture_frame(gesture);
        self.render_panels(ctx);
        self.render_hints_overlay(ctx);
        self.schedule_banner_repaint(ctx);
    }
}

impl EguiApp {
    fn prepare_frame(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        self.controller.tick_status(Instant::now());
    }

    fn schedule_banner_repaint(&self, ctx: &egui::Context) {
        if let Some(expires_at) = self.controller.ui.status.expires_at {
            ctx.request_repaint_after(expires_at.saturating_duration_since(Instant::now()));
        }
    }
}
