//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::SubmissionService;
use crate::config::NotionConfig;
use crate::domain::repositories::SubmissionRepository;

/// State shared by all requests.
///
/// Built once at startup from [`crate::config::Config`]; handlers never read
/// the environment themselves.
#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn SubmissionRepository>, notion: NotionConfig) -> Self {
        Self {
            submission_service: Arc::new(SubmissionService::new(repository, notion)),
        }
    }
}
