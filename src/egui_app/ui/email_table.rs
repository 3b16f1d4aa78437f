//! Email table: sorted rows with inline detail expansion and label toggles.

use eframe::egui::{self, Margin, RichText, Ui};

use super::{SpamFilterApp, style};
use crate::backend::{LabelChoice, UserLabel};
use crate::egui_app::view_model::{self, EmailRowView};

const ID_COL_WIDTH: f32 = 70.0;
const PREDICTION_COL_WIDTH: f32 = 110.0;
const ACTIONS_COL_WIDTH: f32 = 120.0;
const ROW_HEIGHT: f32 = 20.0;

fn subject_width(available: f32) -> f32 {
    (available - PREDICTION_COL_WIDTH - ACTIONS_COL_WIDTH - 24.0).max(120.0)
}

impl SpamFilterApp {
    pub(super) fn render_email_table(&mut self, ui: &mut Ui) {
        let rows = view_model::email_rows(&self.controller.store);
        self.render_header_row(ui);
        ui.separator();
        if rows.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("No emails loaded yet.").color(style::palette().text_muted));
            return;
        }
        egui::ScrollArea::vertical()
            .id_salt("email_table_scroll")
            .show(ui, |ui| {
                for row in &rows {
                    self.render_email_row(ui, row);
                }
            });
    }

    fn render_header_row(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_sized(
                [ID_COL_WIDTH, ROW_HEIGHT],
                egui::Label::new(RichText::new("ID").strong()),
            );
            let width = subject_width(ui.available_width());
            ui.add_sized(
                [width, ROW_HEIGHT],
                egui::Label::new(RichText::new("Subject").strong()),
            );
            ui.add_sized(
                [PREDICTION_COL_WIDTH, ROW_HEIGHT],
                egui::Label::new(RichText::new("Ham Probability").strong()),
            );
            ui.add_sized(
                [ACTIONS_COL_WIDTH, ROW_HEIGHT],
                egui::Label::new(RichText::new("Ham / Spam").strong()),
            );
        });
    }

    fn render_email_row(&mut self, ui: &mut Ui, row: &EmailRowView) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.add_sized(
                [ID_COL_WIDTH, ROW_HEIGHT],
                egui::Label::new(RichText::new(row.id.to_string()).color(palette.text_muted)),
            );
            let width = subject_width(ui.available_width());
            let subject = ui.add_sized(
                [width, ROW_HEIGHT],
                egui::Label::new(RichText::new(&row.subject).color(palette.text_primary))
                    .truncate()
                    .sense(egui::Sense::click()),
            );
            if subject.clicked() {
                self.controller.toggle_expanded(row.id);
            }
            let pct = format!("{}%", row.prediction_pct);
            let pct_text = if row.ham_leaning {
                RichText::new(pct).strong().color(palette.accent_ham)
            } else {
                RichText::new(pct).color(palette.text_muted)
            };
            ui.add_sized([PREDICTION_COL_WIDTH, ROW_HEIGHT], egui::Label::new(pct_text));
            self.render_label_actions(ui, row);
        });
        if row.expanded {
            self.render_detail_panel(ui, row);
        }
        ui.separator();
    }

    fn render_label_actions(&mut self, ui: &mut Ui, row: &EmailRowView) {
        let palette = style::palette();
        let ham_set = row.label == UserLabel::Ham;
        let spam_set = row.label == UserLabel::Spam;

        let ham_text = if ham_set {
            RichText::new("Ham").strong().color(palette.accent_ham)
        } else {
            RichText::new("Ham")
        };
        let ham = ui
            .selectable_label(ham_set, ham_text)
            .on_hover_text(if ham_set { "Marked as Ham" } else { "Mark as Ham" });
        if ham.clicked() && !ham_set {
            self.controller.set_label(row.id, LabelChoice::Ham);
        }

        let spam_text = if spam_set {
            RichText::new("Spam").strong().color(palette.accent_spam)
        } else {
            RichText::new("Spam")
        };
        let spam = ui.selectable_label(spam_set, spam_text).on_hover_text(if spam_set {
            "Marked as Spam"
        } else {
            "Mark as Spam"
        });
        if spam.clicked() && !spam_set {
            self.controller.set_label(row.id, LabelChoice::Spam);
        }
    }

    fn render_detail_panel(&self, ui: &mut Ui, row: &EmailRowView) {
        let palette = style::palette();
        egui::Frame::new()
            .fill(palette.bg_tertiary)
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for line in &row.content_lines {
                    if line.is_empty() {
                        ui.add_space(ROW_HEIGHT * 0.5);
                    } else {
                        ui.label(RichText::new(line).color(palette.text_primary));
                    }
                }
            });
    }
}
