//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns whether the service is configured to forward submissions.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Secret and database id are configured
/// - **503 Service Unavailable**: One of them is missing
///
/// Notion itself is never called.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "notion_secret": { "status": "ok" },
///     "notion_database": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let notion = state.submission_service.notion_config();

    let secret_check = check_setting(notion.secret.is_some(), "NOTION_SECRET");
    let database_check = check_setting(notion.database_id.is_some(), "NOTION_DB");

    let all_healthy = secret_check.is_ok() && database_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            notion_secret: secret_check,
            notion_database: database_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_setting(present: bool, variable: &str) -> CheckStatus {
    if present {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} is not set", variable)),
        }
    }
}
