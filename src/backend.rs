//! Typed client for the spam-classification backend.
//!
//! The backend owns all classification state (model, training, labels); this
//! client only shuttles JSON over its REST surface. Calls are synchronous and
//! are expected to run on worker threads, never on the UI thread.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http_client;

/// Identifier of an email document in the backend's training set.
///
/// The backend serializes ids as JSON numbers in email bodies and as strings
/// in label acknowledgements, so deserialization accepts both forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for EmailId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid email id: {text:?}"))),
        }
    }
}

/// User-provided label state, stored by the backend as a signed indicator
/// (`"1"` ham, `"-1"` spam, anything else unlabeled).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserLabel {
    /// No user label recorded yet.
    #[default]
    Unlabeled,
    /// Marked as legitimate mail.
    Ham,
    /// Marked as junk mail.
    Spam,
}

/// Label value a user can assign. The wire format uses the lowercase names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelChoice {
    /// Mark the email as legitimate.
    Ham,
    /// Mark the email as junk.
    Spam,
}

impl LabelChoice {
    /// Wire value sent in the label request body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ham => "ham",
            Self::Spam => "spam",
        }
    }

    /// The stored tri-state this choice corresponds to.
    pub fn as_user_label(self) -> UserLabel {
        match self {
            Self::Ham => UserLabel::Ham,
            Self::Spam => UserLabel::Spam,
        }
    }
}

/// One email document as served by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct EmailRecord {
    /// Unique id within the training set.
    pub id: EmailId,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Raw text body; may contain excess whitespace and newlines.
    #[serde(default)]
    pub content: String,
    /// Model-estimated probability of the ham class, 0.0-1.0.
    #[serde(default)]
    pub prediction: f64,
    /// User label, if any.
    #[serde(default, deserialize_with = "de_user_label")]
    pub label: UserLabel,
}

fn de_user_label<'de, D>(deserializer: D) -> Result<UserLabel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => match text.trim() {
            "1" => UserLabel::Ham,
            "-1" => UserLabel::Spam,
            _ => UserLabel::Unlabeled,
        },
        Some(serde_json::Value::Number(number)) => match number.as_i64() {
            Some(1) => UserLabel::Ham,
            Some(-1) => UserLabel::Spam,
            _ => UserLabel::Unlabeled,
        },
        _ => UserLabel::Unlabeled,
    })
}

/// Aggregate classifier summary plus user label counts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReportDetails {
    /// Number of user-provided ham labels.
    pub count_ham: i64,
    /// Number of user-provided spam labels.
    pub count_spam: i64,
    /// Preformatted classification metrics printout.
    pub report: String,
}

impl Default for ReportDetails {
    fn default() -> Self {
        Self {
            count_ham: -1,
            count_spam: -1,
            report: String::new(),
        }
    }
}

/// Failure surfaced by any backend call. Connection failures, non-2xx
/// responses, and malformed payloads all land here; callers treat them
/// uniformly (log and leave state untouched).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),
    /// Response body did not parse as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(String),
}

#[derive(Clone, Debug, Serialize)]
struct LabelPayload {
    label: &'static str,
}

/// Thin typed wrapper over the backend's REST surface.
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base host, e.g. `http://127.0.0.1:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Fetch a fresh random batch of emails.
    pub fn fetch_random_emails(&self) -> Result<Vec<EmailRecord>, ApiError> {
        get_json(&self.url("/email"))
    }

    /// Fetch one email by id.
    pub fn fetch_email(&self, id: EmailId) -> Result<EmailRecord, ApiError> {
        get_json(&self.url(&format!("/email/{id}")))
    }

    /// Persist a user label for one email. The acknowledgement body is
    /// ignored beyond success or failure.
    pub fn put_label(&self, id: EmailId, label: LabelChoice) -> Result<(), ApiError> {
        let url = self.url(&format!("/email/{id}/label"));
        let payload = LabelPayload {
            label: label.as_str(),
        };
        http_client::agent()
            .put(&url)
            .send_json(payload)
            .map(|_| ())
            .map_err(map_call_error)
    }

    /// Fetch the aggregate classification report.
    pub fn fetch_report(&self) -> Result<ReportDetails, ApiError> {
        get_json(&self.url("/report"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    let response = http_client::agent()
        .get(url)
        .call()
        .map_err(map_call_error)?;
    response
        .into_json::<T>()
        .map_err(|err| ApiError::Json(err.to_string()))
}

fn map_call_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            ApiError::Http(format!("HTTP {code}: {body}"))
        }
        ureq::Error::Transport(err) => ApiError::Http(err.to_string()),
    }
}
