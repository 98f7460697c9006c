//! Integration tests for the shared HTTP pipeline.
//!
//! These tests verify authenticated URL construction, parameter encoding,
//! response classification, and error-message enrichment against a mock
//! server.

use facebook_commerce::client::{HttpClient, Params};
use facebook_commerce::{AccessToken, CmsId, CommerceConfig, HttpError};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(server: &MockServer) -> CommerceConfig {
    CommerceConfig::builder()
        .cms_id(CmsId::new("123").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_places_access_token_and_params_in_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("access_token", "test-token"))
        .and(query_param("state", "CREATED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let mut params = Params::new();
    params.insert("state".to_string(), "CREATED".to_string());

    let body = client.get("orders", &params).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_get_returns_decoded_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1320178428999123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "1320178428999123", "channel": "facebook"})),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let body = client.get("1320178428999123", &Params::new()).await.unwrap();

    assert_eq!(body["id"], "1320178428999123");
    assert_eq!(body["channel"], "facebook");
}

#[tokio::test]
async fn test_post_sends_form_encoded_body_with_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/123/order_management_apps"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("access_token=test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let body = client
        .post("123/order_management_apps", &Params::new())
        .await
        .unwrap();

    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_success_response_with_invalid_json_is_malformed_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let result = client.get("orders", &Params::new()).await;

    match result {
        Err(HttpError::MalformedBody { body, .. }) => assert_eq!(body, "not json"),
        other => panic!("expected MalformedBody, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_message_is_enriched_from_error_user_msg() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"error": {"error_user_msg": "Order is already acknowledged."}}),
        ))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let result = client.get("orders", &Params::new()).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.to_string(), "Bad Request: Order is already acknowledged.");
            assert!(e.body.contains("error_user_msg"));
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_with_empty_body_uses_status_message_alone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let result = client.get("orders", &Params::new()).await;

    match result {
        Err(HttpError::Response(e)) => assert_eq!(e.to_string(), "Not Found"),
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_with_non_json_body_swallows_enrichment_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let result = client.get("orders", &Params::new()).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.to_string(), "Internal Server Error");
            assert_eq!(e.body, "<html>oops</html>");
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_call_performs_exactly_one_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_test_config(&server));
    let result = client.get("orders", &Params::new()).await;

    assert!(matches!(result, Err(HttpError::Response(_))));
}
