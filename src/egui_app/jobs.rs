//! Background job channel for backend calls.
//!
//! Every asynchronous action spawns a short-lived worker thread that runs
//! one HTTP call and reports the result as a [`JobMessage`]. The controller
//! drains the channel once per frame on the UI thread, so store mutations
//! stay single-threaded. There is no cancellation: a late result still
//! applies when it arrives, last write wins.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::backend::{ApiError, BackendClient, EmailId, EmailRecord, LabelChoice, ReportDetails};

/// Completion message from one background backend call.
pub enum JobMessage {
    /// A random batch finished loading.
    EmailsLoaded(Result<Vec<EmailRecord>, ApiError>),
    /// A single email finished loading.
    EmailLoaded {
        /// Id the fetch was issued for.
        id: EmailId,
        /// Fetched record or failure.
        result: Result<EmailRecord, ApiError>,
    },
    /// A label write finished.
    LabelSaved {
        /// Id the label was written for.
        id: EmailId,
        /// Label that was sent.
        label: LabelChoice,
        /// Acknowledgement or failure.
        result: Result<(), ApiError>,
    },
    /// The classification report finished loading.
    ReportLoaded(Result<ReportDetails, ApiError>),
}

/// Owns the message channel and spawns worker threads.
pub struct Jobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    repaint: Option<egui::Context>,
}

impl Jobs {
    /// Create the channel. When a context is given, each finished job
    /// requests a repaint so results apply without waiting for input.
    pub fn new(repaint: Option<egui::Context>) -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            repaint,
        }
    }

    /// Non-blocking receive for the per-frame drain.
    pub fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Fetch a fresh random batch on a worker thread.
    pub fn spawn_fetch_random_emails(&self, client: BackendClient) {
        self.spawn(move || JobMessage::EmailsLoaded(client.fetch_random_emails()));
    }

    /// Fetch one email on a worker thread.
    pub fn spawn_fetch_email(&self, client: BackendClient, id: EmailId) {
        self.spawn(move || JobMessage::EmailLoaded {
            id,
            result: client.fetch_email(id),
        });
    }

    /// Write one label on a worker thread.
    pub fn spawn_put_label(&self, client: BackendClient, id: EmailId, label: LabelChoice) {
        self.spawn(move || JobMessage::LabelSaved {
            id,
            label,
            result: client.put_label(id, label),
        });
    }

    /// Fetch the classification report on a worker thread.
    pub fn spawn_fetch_report(&self, client: BackendClient) {
        self.spawn(move || JobMessage::ReportLoaded(client.fetch_report()));
    }

    fn spawn(&self, job: impl FnOnce() -> JobMessage + Send + 'static) {
        let tx = self.message_tx.clone();
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let _ = tx.send(job());
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}
