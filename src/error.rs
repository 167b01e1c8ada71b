//! HTTP-facing error type for the submission endpoint.
//!
//! Every failure of the handler is converted into one of these variants and
//! rendered as a JSON body; nothing propagates as an unhandled fault.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::{ForwardError, UNKNOWN_ERROR_DETAILS};

/// Error body returned to the form.
///
/// `details` is only present for processing failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Notion secret is not configured")]
    MissingSecret,

    #[error("Notion database ID is not configured")]
    MissingDatabaseId,

    /// Parsing, record construction or the external call failed.
    ///
    /// `details` is `None` when the failure carried no usable message.
    #[error("Failed to process submission")]
    Processing { details: Option<String> },
}

impl AppError {
    pub fn processing(details: impl Into<String>) -> Self {
        Self::Processing {
            details: Some(details.into()),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingSecret | Self::MissingDatabaseId | Self::Processing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the JSON body for this error.
    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            Self::Processing { details } => Some(
                details
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ERROR_DETAILS.to_string()),
            ),
            _ => None,
        };

        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(e: BytesRejection) -> Self {
        Self::processing(e.body_text())
    }
}

impl From<ForwardError> for AppError {
    fn from(e: ForwardError) -> Self {
        Self::Processing {
            details: e.details(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::processing(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}
