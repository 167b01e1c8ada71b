//! Notion API client implementing [`SubmissionRepository`].

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::page::{NotionErrorBody, PageRequest};
use crate::config::NotionConfig;
use crate::domain::entities::{ContactRecord, CreatedRecord, DatabaseTarget};
use crate::domain::repositories::{ForwardError, SubmissionRepository};

/// Creates contact records as pages in a Notion database.
///
/// Credentials are passed per call through [`DatabaseTarget`], so one client
/// is shared by all requests. Requests are sent once and never retried.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    api_url: String,
    api_version: String,
}

impl NotionClient {
    /// Creates a client for the API at `api_url` (e.g. `https://api.notion.com/v1`).
    pub fn new(api_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_version: api_version.into(),
        }
    }

    /// Creates a client from the API URL and version in `config`.
    pub fn from_config(config: &NotionConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_version.clone())
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SubmissionRepository for NotionClient {
    async fn create(
        &self,
        target: &DatabaseTarget,
        record: ContactRecord,
    ) -> Result<CreatedRecord, ForwardError> {
        let body = PageRequest::new(&target.database_id, &record);

        let response = self
            .http
            .post(self.pages_url())
            .bearer_auth(&target.secret)
            .header("Notion-Version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        if !status.is_success() {
            let error = serde_json::from_str::<NotionErrorBody>(&text).ok();
            warn!(
                status = status.as_u16(),
                code = error.as_ref().and_then(|e| e.code.as_deref()),
                "Notion rejected page create"
            );
            let message = error
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| rejected_without_message(status.as_u16()));
            return Err(ForwardError::Rejected {
                status: status.as_u16(),
                message: Some(message),
            });
        }

        let created: CreatedRecord =
            serde_json::from_str(&text).map_err(|e| ForwardError::Decode(e.to_string()))?;
        debug!(page_id = %created.id, "Notion page created");

        Ok(created)
    }
}

/// Message for an error response that does not say what went wrong.
fn rejected_without_message(status: u16) -> String {
    format!("Request to Notion API failed with status: {status}")
}
