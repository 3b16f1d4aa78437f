//! Controller bridging the store to backend jobs and the egui renderer.
//!
//! Synchronous mutations live on [`StoreState`]; the methods here are the
//! asynchronous actions: each spawns a backend call and the result is
//! applied during [`SpamFilterController::poll_background_jobs`]. Every
//! failure is handled at that single boundary: log, leave state untouched,
//! no user-facing notification.

use std::sync::mpsc::TryRecvError;

use crate::backend::{BackendClient, EmailId, LabelChoice};
use crate::config::AppConfig;
use crate::egui_app::jobs::{JobMessage, Jobs};
use crate::egui_app::state::{StatusBarState, StatusTone, StoreState};

/// Email id fetched by the debug toolbar action.
pub const DEBUG_EMAIL_ID: EmailId = EmailId(11399);

/// Maintains app state and bridges backend calls to the egui UI.
pub struct SpamFilterController {
    /// Store consumed by the renderer.
    pub store: StoreState,
    client: BackendClient,
    jobs: Jobs,
}

impl SpamFilterController {
    /// Create a controller talking to the configured backend host.
    pub fn new(config: &AppConfig, repaint: Option<egui::Context>) -> Self {
        Self {
            store: StoreState::default(),
            client: BackendClient::new(config.backend_host.clone()),
            jobs: Jobs::new(repaint),
        }
    }

    /// Fetch a fresh random batch; the collection is replaced on success.
    pub fn fetch_random_emails(&self) {
        self.jobs.spawn_fetch_random_emails(self.client.clone());
    }

    /// Fetch one email by id; the record is upserted on success.
    pub fn fetch_email(&self, id: EmailId) {
        self.jobs.spawn_fetch_email(self.client.clone(), id);
    }

    /// Persist a user label, unless the record already holds that label.
    pub fn set_label(&self, id: EmailId, label: LabelChoice) {
        let current = self.store.emails.get(&id).map(|email| email.label);
        if current == Some(label.as_user_label()) {
            return;
        }
        self.jobs.spawn_put_label(self.client.clone(), id, label);
    }

    /// Fetch the classification report; the dialog opens on success.
    pub fn fetch_report(&self) {
        self.jobs.spawn_fetch_report(self.client.clone());
    }

    /// Close the report dialog.
    pub fn close_report_dialog(&mut self) {
        self.store.close_report_dialog();
    }

    /// Toggle the detail panel for one row.
    pub fn toggle_expanded(&mut self, id: EmailId) {
        self.store.toggle_expanded(id);
    }

    /// Drain completed jobs and apply their store mutations.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };

            match message {
                JobMessage::EmailsLoaded(result) => match result {
                    Ok(list) => {
                        let count = list.len();
                        self.store.load_emails(list);
                        self.set_status(format!("{count} emails loaded"), StatusTone::Info);
                    }
                    Err(err) => tracing::warn!("Failed to load email batch: {err}"),
                },
                JobMessage::EmailLoaded { id, result } => match result {
                    Ok(record) => self.store.load_email(record),
                    Err(err) => tracing::warn!("Failed to load email {id}: {err}"),
                },
                JobMessage::LabelSaved { id, label, result } => match result {
                    Ok(()) => {
                        self.set_status(
                            format!("Marked email {id} as {}", label.as_str()),
                            StatusTone::Info,
                        );
                        self.refresh_all_emails();
                    }
                    Err(err) => tracing::warn!("Failed to save label for email {id}: {err}"),
                },
                JobMessage::ReportLoaded(result) => match result {
                    Ok(report) => {
                        self.store.load_report_details(report);
                        self.store.open_report_dialog();
                    }
                    Err(err) => tracing::warn!("Failed to load classification report: {err}"),
                },
            }
        }
    }

    /// Re-fetch every email currently in the collection. Predictions shift
    /// after each training step, so the whole collection is resynced rather
    /// than trusting the label acknowledgement.
    fn refresh_all_emails(&self) {
        for id in self.store.emails.keys().copied() {
            self.fetch_email(id);
        }
    }

    fn set_status(&mut self, text: String, tone: StatusTone) {
        self.store.status = StatusBarState { text, tone };
    }
}
