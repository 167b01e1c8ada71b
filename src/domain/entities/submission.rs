//! Submission entity and the record built from it.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A contact form submission as received from the form.
///
/// Submissions have no identity and are never stored by this service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Submission {
    /// Creates a new Submission instance.
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// A submission stamped with the time it was handled.
///
/// The timestamp is always taken on the server, so two identical submissions
/// handled at different times produce different records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Stamps `submission` with `submitted_at`.
    pub fn new(submission: Submission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: submission.name,
            phone: submission.phone,
            email: submission.email,
            submitted_at,
        }
    }

    /// Returns the submission time as ISO-8601 UTC with millisecond precision,
    /// e.g. `2026-10-19T12:00:00.000Z`.
    pub fn submitted_at_iso(&self) -> String {
        self.submitted_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Credentials and address of the database a record is created in.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseTarget {
    pub secret: String,
    pub database_id: String,
}

impl std::fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseTarget")
            .field("secret", &"***")
            .field("database_id", &self.database_id)
            .finish()
    }
}

/// A record created by the external service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRecord {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}
