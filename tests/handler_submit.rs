mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use contact_form::config::NotionConfig;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_submit_success_forwards_one_record() {
    let notion = MockServer::start_async().await;
    let create_page = notion
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/pages")
                .header("Authorization", "Bearer secret_test")
                .header("Notion-Version", "2022-06-28")
                .json_body_partial(
                    r#"{
                        "parent": { "database_id": "db-test-123" },
                        "properties": {
                            "Name": { "title": [{ "text": { "content": "Jane Doe" } }] },
                            "Phone": { "rich_text": [{ "text": { "content": "+15551234567" } }] },
                            "Email": { "email": "jane@example.com" }
                        }
                    }"#,
                )
                .matches(common::submission_date_is_recent);
            then.status(200)
                .json_body(json!({ "object": "page", "id": "page-1" }));
        })
        .await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"{"success":true,"message":"Form submitted successfully!"}"#
    );
    create_page.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_non_post_methods_rejected() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let responses = vec![
        server.get("/api/notion").await,
        server.put("/api/notion").json(&common::jane_doe()).await,
        server.patch("/api/notion").json(&common::jane_doe()).await,
        server.delete("/api/notion").await,
    ];

    for response in responses {
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), r#"{"error":"Method Not Allowed"}"#);
    }

    create_page.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_missing_secret() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let config = NotionConfig::new(None, Some(common::TEST_DATABASE.to_string()))
        .with_api_url(notion.url("/v1"));
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"error":"Notion secret is not configured"}"#
    );
    create_page.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_missing_secret_reported_before_database() {
    let notion = MockServer::start_async().await;

    let config = NotionConfig::new(None, None).with_api_url(notion.url("/v1"));
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Notion secret is not configured");
}

#[tokio::test]
async fn test_missing_database_id() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let config = NotionConfig::new(Some(common::TEST_SECRET.to_string()), None)
        .with_api_url(notion.url("/v1"));
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"error":"Notion database ID is not configured"}"#
    );
    create_page.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_configuration_checked_before_payload() {
    let notion = MockServer::start_async().await;

    let config = NotionConfig::new(None, None).with_api_url(notion.url("/v1"));
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").text("not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"error":"Notion secret is not configured"}"#
    );
}

#[tokio::test]
async fn test_notion_error_message_in_details() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_rejected(&notion, 400, "boom").await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Failed to process submission", "details": "boom" })
    );
    create_page.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_notion_error_without_message_reports_status() {
    let notion = MockServer::start_async().await;
    let create_page = notion
        .mock_async(|when, then| {
            when.method(POST).path("/v1/pages");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "error": "Failed to process submission",
            "details": "Request to Notion API failed with status: 502"
        })
    );
    create_page.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_malformed_json_is_processing_failure() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").text("{ not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to process submission");
    assert!(json["details"].as_str().is_some_and(|d| !d.is_empty()));
    create_page.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_unvalidated_payload_still_forwarded() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server
        .post("/api/notion")
        .json(&json!({ "name": "", "phone": "1", "email": "nope" }))
        .await;

    response.assert_status_ok();
    create_page.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_notion_unreachable() {
    let config = NotionConfig::new(
        Some(common::TEST_SECRET.to_string()),
        Some(common::TEST_DATABASE.to_string()),
    )
    .with_api_url("http://127.0.0.1:1/v1");
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server.post("/api/notion").json(&common::jane_doe()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to process submission");
    assert!(json["details"].is_string());
}

fn oversized_submission() -> String {
    format!(
        r#"{{"name":"{}","phone":"+15551234567","email":"jane@example.com"}}"#,
        "a".repeat(3 * 1024 * 1024)
    )
}

#[tokio::test]
async fn test_oversized_body_is_processing_failure() {
    let notion = MockServer::start_async().await;
    let create_page = common::mock_page_created(&notion).await;

    let state = common::create_test_state(common::notion_config(&notion));
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server
        .post("/api/notion")
        .text(oversized_submission())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to process submission");
    assert!(
        json["details"]
            .as_str()
            .is_some_and(|d| d.contains("length limit exceeded"))
    );
    create_page.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_oversized_body_reports_missing_secret_first() {
    let notion = MockServer::start_async().await;

    let config = NotionConfig::new(None, Some(common::TEST_DATABASE.to_string()))
        .with_api_url(notion.url("/v1"));
    let state = common::create_test_state(config);
    let server = TestServer::new(common::submission_app(state)).unwrap();

    let response = server
        .post("/api/notion")
        .text(oversized_submission())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"error":"Notion secret is not configured"}"#
    );
}
