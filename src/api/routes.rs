//! API route configuration.

use crate::api::handlers::{method_not_allowed_handler, submit_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Submission routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /notion` - Forward a contact form submission
///
/// Every other method on `/notion` is answered with `405` and a JSON body.
pub fn submission_routes() -> Router<AppState> {
    Router::new().route(
        "/notion",
        post(submit_handler).fallback(method_not_allowed_handler),
    )
}
