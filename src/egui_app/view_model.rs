//! Helpers converting store data into render-friendly rows.
//!
//! Display values are derived fresh on every call and never written back;
//! the raw prediction in the store stays untouched.

use crate::backend::{EmailId, UserLabel};
use crate::egui_app::state::StoreState;
use crate::text;

/// Render-ready row for the email table.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailRowView {
    /// Email id, also the sort key.
    pub id: EmailId,
    /// Subject line.
    pub subject: String,
    /// Ham probability formatted as a percentage with two decimals.
    pub prediction_pct: String,
    /// Whether the prediction leans ham (above 50%).
    pub ham_leaning: bool,
    /// Current user label.
    pub label: UserLabel,
    /// Whether the detail panel is open for this row.
    pub expanded: bool,
    /// Detail-panel lines; empty unless expanded.
    pub content_lines: Vec<String>,
}

/// Format a raw ham probability for display.
pub fn prediction_percent(prediction: f64) -> String {
    format!("{:.2}", prediction * 100.0)
}

/// Build sorted table rows from the store (ascending numeric id).
pub fn email_rows(store: &StoreState) -> Vec<EmailRowView> {
    store
        .emails
        .values()
        .map(|email| {
            let expanded = store.expanded.contains(&email.id);
            EmailRowView {
                id: email.id,
                subject: email.subject.clone(),
                prediction_pct: prediction_percent(email.prediction),
                ham_leaning: email.prediction * 100.0 > 50.0,
                label: email.label,
                expanded,
                content_lines: if expanded {
                    text::content_lines(&email.content)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
