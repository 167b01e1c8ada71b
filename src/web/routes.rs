//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::contact_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Contact form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(contact_handler))
}
