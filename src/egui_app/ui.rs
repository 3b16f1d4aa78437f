//! egui renderer for the application UI.

mod email_table;
mod report_dialog;
mod style;

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use crate::config;
use crate::egui_app::controller::{DEBUG_EMAIL_ID, SpamFilterController};

/// Minimum window size the table layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 480.0);

/// Renders the egui UI using the shared controller state.
pub struct SpamFilterApp {
    controller: SpamFilterController,
    visuals_set: bool,
}

impl SpamFilterApp {
    /// Create the app, loading persisted configuration and dispatching the
    /// initial email fetch.
    pub fn new(ctx: &egui::Context) -> Result<Self, String> {
        let config =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        let controller = SpamFilterController::new(&config, Some(ctx.clone()));
        controller.fetch_random_emails();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("toolbar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Spam Filter Demo")
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(8.0);
                    ui.separator();
                    if ui.button("Show classification report").clicked() {
                        self.controller.fetch_report();
                    }
                    if ui.button("Load 10 new emails").clicked() {
                        self.controller.fetch_random_emails();
                    }
                    if cfg!(debug_assertions)
                        && ui
                            .button(format!("Debug: Fetch email {DEBUG_EMAIL_ID}"))
                            .clicked()
                    {
                        self.controller.fetch_email(DEBUG_EMAIL_ID);
                    }
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.store.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 0.0, style::status_badge_color(status.tone));
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::badge_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_email_table(ui);
        });
    }
}

impl eframe::App for SpamFilterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_toolbar(ctx);
        self.render_status(ctx);
        self.render_central(ctx);
        self.render_report_dialog(ctx);
    }
}
