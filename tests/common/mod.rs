#![allow(dead_code)]

use axum::Router;
use contact_form::api::routes::submission_routes;
use contact_form::config::NotionConfig;
use contact_form::infrastructure::notion::NotionClient;
use contact_form::state::AppState;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_SECRET: &str = "secret_test";
pub const TEST_DATABASE: &str = "db-test-123";

/// Notion settings pointing at `server`.
pub fn notion_config(server: &MockServer) -> NotionConfig {
    NotionConfig::new(Some(TEST_SECRET.to_string()), Some(TEST_DATABASE.to_string()))
        .with_api_url(server.url("/v1"))
}

pub fn create_test_state(notion: NotionConfig) -> AppState {
    let client = NotionClient::from_config(&notion);
    AppState::new(Arc::new(client), notion)
}

/// Router with the submission endpoint mounted under `/api`.
pub fn submission_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", submission_routes())
        .with_state(state)
}

pub fn jane_doe() -> Value {
    json!({
        "name": "Jane Doe",
        "phone": "+15551234567",
        "email": "jane@example.com"
    })
}

/// Mocks a successful page create for any request to `/v1/pages`.
pub async fn mock_page_created(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/pages");
            then.status(200).json_body(json!({
                "object": "page",
                "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
                "url": "https://www.notion.so/Jane-Doe-598337872cf94fdf8782e53db20768a5"
            }));
        })
        .await
}

/// Mocks a Notion error response with the given message.
pub async fn mock_page_rejected<'a>(server: &'a MockServer, status: u16, message: &str) -> Mock<'a> {
    let body = json!({
        "object": "error",
        "status": status,
        "code": "validation_error",
        "message": message
    });
    server
        .mock_async(move |when, then| {
            when.method(POST).path("/v1/pages");
            then.status(status).json_body(body);
        })
        .await
}

/// Matches when the `Submission Date` property is an ISO-8601 UTC timestamp
/// within a minute of now.
pub fn submission_date_is_recent(req: &HttpMockRequest) -> bool {
    let Some(body) = req.body.as_ref() else {
        return false;
    };
    let Ok(json) = serde_json::from_slice::<Value>(body) else {
        return false;
    };
    let Some(start) = json["properties"]["Submission Date"]["date"]["start"].as_str() else {
        return false;
    };
    let Ok(stamped) = chrono::DateTime::parse_from_rfc3339(start) else {
        return false;
    };

    let age = chrono::Utc::now().signed_duration_since(stamped);
    start.ends_with('Z') && age >= chrono::Duration::seconds(-5) && age <= chrono::Duration::seconds(60)
}
