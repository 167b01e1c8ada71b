//! Repository trait for forwarding submissions to the external database.

use crate::domain::entities::{ContactRecord, CreatedRecord, DatabaseTarget};
use async_trait::async_trait;

/// Placeholder detail for failures that carry no message.
pub const UNKNOWN_ERROR_DETAILS: &str = "An unknown error occurred";

/// Why a record could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForwardError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR_DETAILS))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The service answered with success but the body was not a record.
    #[error("{0}")]
    Decode(String),
}

impl ForwardError {
    /// Returns the message to report to the caller, if the failure has one.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Transport(message) | Self::Decode(message) => {
                Some(message.clone()).filter(|m| !m.is_empty())
            }
            Self::Rejected { message, .. } => message.clone().filter(|m| !m.is_empty()),
        }
    }
}

/// Repository interface for creating contact records.
///
/// Each call is attempted exactly once; implementations must not retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::notion::NotionClient`] - Notion API implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Creates one record in the database addressed by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Transport`] if the service is unreachable,
    /// [`ForwardError::Rejected`] if it refuses the record, and
    /// [`ForwardError::Decode`] if its answer cannot be read.
    async fn create(
        &self,
        target: &DatabaseTarget,
        record: ContactRecord,
    ) -> Result<CreatedRecord, ForwardError>;
}
