//! Submission forwarding service.

use std::sync::Arc;

use chrono::Utc;

use crate::config::NotionConfig;
use crate::domain::entities::{ContactRecord, CreatedRecord, DatabaseTarget, Submission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Service that turns a submission into one record in the configured database.
///
/// Holds no per-request state; one instance is shared by all requests.
pub struct SubmissionService {
    repository: Arc<dyn SubmissionRepository>,
    notion: NotionConfig,
}

impl SubmissionService {
    /// Creates a new submission service.
    pub fn new(repository: Arc<dyn SubmissionRepository>, notion: NotionConfig) -> Self {
        Self { repository, notion }
    }

    /// Returns the Notion settings this service was built with.
    pub fn notion_config(&self) -> &NotionConfig {
        &self.notion
    }

    /// Returns the configured database target.
    ///
    /// The secret is checked before the database id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingSecret`] or [`AppError::MissingDatabaseId`].
    pub fn target(&self) -> Result<DatabaseTarget, AppError> {
        let secret = self.notion.secret.clone().ok_or_else(|| {
            tracing::error!("NOTION_SECRET is not configured");
            AppError::MissingSecret
        })?;
        let database_id = self
            .notion
            .database_id
            .clone()
            .ok_or_else(|| {
                tracing::error!("NOTION_DB is not configured");
                AppError::MissingDatabaseId
            })?;

        Ok(DatabaseTarget {
            secret,
            database_id,
        })
    }

    /// Stamps `submission` with the current time and creates a record for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Processing`] if the record could not be created.
    pub async fn submit(
        &self,
        target: &DatabaseTarget,
        submission: Submission,
    ) -> Result<CreatedRecord, AppError> {
        let record = ContactRecord::new(submission, Utc::now());

        match self.repository.create(target, record).await {
            Ok(created) => {
                tracing::info!(record_id = %created.id, "Notion page created successfully");
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Notion page");
                Err(e.into())
            }
        }
    }
}
