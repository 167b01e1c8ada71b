//! Network seam between the form state machine and the submission endpoint.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::api::dto::submission::SubmissionRequest;

/// Raw answer of the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request produced no response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
}

/// Sends one submission and returns the endpoint's answer.
///
/// # Implementations
///
/// - [`HttpTransport`] - JSON `POST` with `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Posts `request` as JSON.
    ///
    /// Any HTTP status, success or not, is an `Ok` response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if no response was received.
    async fn send(&self, request: &SubmissionRequest)
    -> Result<TransportResponse, TransportError>;
}

/// Posts submissions to the endpoint URL over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Creates a transport for `endpoint` (e.g. `http://localhost:3000/api/notion`).
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(
        &self,
        request: &SubmissionRequest,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
