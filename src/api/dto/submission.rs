//! DTOs for the submission endpoint.

use crate::domain::entities::Submission;
use crate::domain::validation::EMAIL_REGEX;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned with every successful submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// JSON payload posted by the contact form.
///
/// The same type is serialized by the form transport and deserialized by the
/// handler. Validation rules mirror the form's checks; the handler only logs
/// violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SubmissionRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 8, max = 12, message = "Phone must be 8-12 characters"))]
    pub phone: String,

    #[validate(regex(path = "*EMAIL_REGEX", message = "Invalid e-mail format"))]
    pub email: String,
}

impl From<SubmissionRequest> for Submission {
    fn from(request: SubmissionRequest) -> Self {
        Submission::new(request.name, request.phone, request.email)
    }
}

impl From<Submission> for SubmissionRequest {
    fn from(submission: Submission) -> Self {
        Self {
            name: submission.name,
            phone: submission.phone,
            email: submission.email,
        }
    }
}

/// Response body for an accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    pub fn submitted() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}
