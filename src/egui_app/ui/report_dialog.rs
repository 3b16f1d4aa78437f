//! Draggable modal dialog showing the classification report.

use eframe::egui::{self, Align2, RichText};

use super::{SpamFilterApp, style};

impl SpamFilterApp {
    pub(super) fn render_report_dialog(&mut self, ctx: &egui::Context) {
        if !self.controller.store.report_open {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.close_report_dialog();
            return;
        }
        if self.render_report_backdrop(ctx) {
            self.controller.close_report_dialog();
            return;
        }

        let rect = ctx.viewport_rect();
        let mut open = true;
        egui::Window::new("Classification Report")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(560.0)
            .pivot(Align2::CENTER_CENTER)
            .default_pos(rect.center())
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_report_body(ui);
            });
        if !open {
            self.controller.close_report_dialog();
        }
    }

    /// Dim the rest of the UI and swallow input behind the dialog.
    /// Returns true when the backdrop was clicked.
    fn render_report_backdrop(&mut self, ctx: &egui::Context) -> bool {
        let rect = ctx.viewport_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("report_backdrop_paint"),
        ));
        painter.rect_filled(
            rect,
            0.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 160),
        );

        let mut clicked = false;
        egui::Area::new(egui::Id::new("report_backdrop_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(rect, egui::Sense::click());
                if response.clicked() {
                    clicked = true;
                }
            });
        clicked
    }

    fn render_report_body(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let report = self.controller.store.report.clone();
        ui.set_min_width(520.0);
        ui.label(
            RichText::new(format!(
                "User has provided {} ham and {} spam labels for the current model.",
                report.count_ham, report.count_spam
            ))
            .color(palette.text_primary),
        );
        ui.label(
            RichText::new("The model performs as follows on the test set:")
                .color(palette.text_primary),
        );
        ui.add_space(8.0);
        egui::ScrollArea::both()
            .id_salt("report_text_scroll")
            .max_height(360.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&report.report)
                        .monospace()
                        .color(palette.text_primary),
                );
            });
        ui.add_space(8.0);
        if ui.button("Close").clicked() {
            self.controller.close_report_dialog();
        }
    }
}
