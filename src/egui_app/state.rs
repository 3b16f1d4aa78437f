//! Store state for the spam-filter UI.
//!
//! One owned state tree, mutated only through these methods while the
//! controller drains its job channel; the renderer reads it and never
//! writes.

use std::collections::{BTreeMap, BTreeSet};

use crate::backend::{EmailId, EmailRecord, ReportDetails};

/// Badge tone for the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing has happened yet.
    Idle,
    /// Informational event.
    Info,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// One-line message.
    pub text: String,
    /// Badge tone.
    pub tone: StatusTone,
}

impl StatusBarState {
    /// Initial footer contents before any data has loaded.
    pub fn idle() -> Self {
        Self {
            text: "Waiting for the first email batch".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Single state tree owned by the controller.
#[derive(Clone, Debug)]
pub struct StoreState {
    /// Email collection keyed by id; key order drives display order.
    pub emails: BTreeMap<EmailId, EmailRecord>,
    /// Whether the classification-report dialog is visible.
    pub report_open: bool,
    /// Last-fetched report payload.
    pub report: ReportDetails,
    /// Rows with their detail panel expanded.
    pub expanded: BTreeSet<EmailId>,
    /// Footer status line.
    pub status: StatusBarState,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            emails: BTreeMap::new(),
            report_open: false,
            report: ReportDetails::default(),
            expanded: BTreeSet::new(),
            status: StatusBarState::idle(),
        }
    }
}

impl StoreState {
    /// Replace the whole collection with the given batch, keyed by id.
    /// Expansion state for ids no longer present is dropped.
    pub fn load_emails(&mut self, list: Vec<EmailRecord>) {
        self.emails = list.into_iter().map(|email| (email.id, email)).collect();
        let emails = &self.emails;
        self.expanded.retain(|id| emails.contains_key(id));
    }

    /// Insert or update one record by id.
    pub fn load_email(&mut self, record: EmailRecord) {
        self.emails.insert(record.id, record);
    }

    /// Show the report dialog.
    pub fn open_report_dialog(&mut self) {
        self.report_open = true;
    }

    /// Hide the report dialog.
    pub fn close_report_dialog(&mut self) {
        self.report_open = false;
    }

    /// Replace the report payload wholesale.
    pub fn load_report_details(&mut self, report: ReportDetails) {
        self.report = report;
    }

    /// Toggle the detail panel for one row.
    pub fn toggle_expanded(&mut self, id: EmailId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::UserLabel;

    fn email(id: u64) -> EmailRecord {
        EmailRecord {
            id: EmailId(id),
            subject: format!("subject {id}"),
            content: format!("content {id}"),
            prediction: 0.5,
            label: UserLabel::Unlabeled,
        }
    }

    #[test]
    fn load_emails_keys_collection_by_id() {
        let mut store = StoreState::default();
        store.load_emails(vec![email(3), email(11399), email(7)]);
        let ids: Vec<_> = store.emails.keys().copied().collect();
        assert_eq!(ids, vec![EmailId(3), EmailId(7), EmailId(11399)]);
        assert_eq!(store.emails[&EmailId(3)].subject, "subject 3");
    }

    #[test]
    fn load_emails_replaces_collection_wholesale() {
        let mut store = StoreState::default();
        store.load_emails(vec![email(3), email(11399), email(7)]);
        store.load_emails(vec![email(1)]);
        let ids: Vec<_> = store.emails.keys().copied().collect();
        assert_eq!(ids, vec![EmailId(1)]);
    }

    #[test]
    fn load_emails_drops_stale_expansion_state() {
        let mut store = StoreState::default();
        store.load_emails(vec![email(3), email(7)]);
        store.toggle_expanded(EmailId(3));
        store.toggle_expanded(EmailId(7));
        store.load_emails(vec![email(7)]);
        assert_eq!(
            store.expanded.iter().copied().collect::<Vec<_>>(),
            vec![EmailId(7)]
        );
    }

    #[test]
    fn load_email_upserts_only_the_given_record() {
        let mut store = StoreState::default();
        store.load_emails(vec![email(3), email(7)]);

        let mut updated = email(3);
        updated.prediction = 0.91;
        store.load_email(updated);
        assert_eq!(store.emails.len(), 2);
        assert_eq!(store.emails[&EmailId(3)].prediction, 0.91);
        assert_eq!(store.emails[&EmailId(7)].prediction, 0.5);

        store.load_email(email(9));
        assert_eq!(store.emails.len(), 3);
    }

    #[test]
    fn report_dialog_flag_transitions() {
        let mut store = StoreState::default();
        assert!(!store.report_open);
        store.open_report_dialog();
        assert!(store.report_open);
        store.close_report_dialog();
        assert!(!store.report_open);
    }

    #[test]
    fn load_report_details_replaces_wholesale() {
        let mut store = StoreState::default();
        assert_eq!(store.report, ReportDetails::default());
        let report = ReportDetails {
            count_ham: 12,
            count_spam: 4,
            report: "precision 0.9".to_string(),
        };
        store.load_report_details(report.clone());
        assert_eq!(store.report, report);
    }

    #[test]
    fn toggle_expanded_flips_per_row() {
        let mut store = StoreState::default();
        store.toggle_expanded(EmailId(5));
        assert!(store.expanded.contains(&EmailId(5)));
        store.toggle_expanded(EmailId(5));
        assert!(store.expanded.is_empty());
    }
}
