//! Handler for the contact form submission endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use validator::Validate;

use crate::api::dto::submission::{SubmissionRequest, SubmissionResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Forwards one contact form submission to the configured Notion database.
///
/// # Endpoint
///
/// `POST /api/notion`
///
/// # Order of Checks
///
/// 1. Notion secret configured (500 otherwise)
/// 2. Notion database id configured (500 otherwise)
/// 3. Body is read within the request size limit (500 otherwise)
/// 4. Body parses as `{ name, phone, email }` (500 otherwise)
///
/// No external call is made unless all of these pass.
///
/// # Request Body
///
/// ```json
/// { "name": "Jane Doe", "phone": "+15551234567", "email": "jane@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Form submitted successfully!" }
/// ```
///
/// # Errors
///
/// Returns 500 with `{ "error": "Failed to process submission", "details": ... }`
/// if the body is unreadable, malformed, or refused by Notion.
pub async fn submit_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let service = &state.submission_service;
    let target = service.target()?;

    let body = body.map_err(|e| {
        tracing::error!(error = %e, "Failed to read submission body");
        AppError::from(e)
    })?;

    let request: SubmissionRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse submission body");
        AppError::from(e)
    })?;

    tracing::info!(
        name = %request.name,
        phone = %request.phone,
        email = %request.email,
        "Received form data"
    );
    audit_request(&request);

    service.submit(&target, request.into()).await?;

    Ok(Json(SubmissionResponse::submitted()))
}

/// Answers any method other than `POST` on the submission endpoint.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

/// Logs field rule violations without rejecting the submission.
///
/// The form checks these rules before sending; payloads that bypass the form
/// are still forwarded.
fn audit_request(request: &SubmissionRequest) {
    if let Err(errors) = request.validate() {
        tracing::warn!(
            fields = ?errors.field_errors().keys().collect::<Vec<_>>(),
            "Submission does not pass form validation, forwarding anyway"
        );
    }
}
