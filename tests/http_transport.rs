//! HTTP transport tests against a local mock server.

use ai_cascade::transport::{AuthScheme, HttpTransport, Transport};
use serde_json::json;

#[tokio::test]
async fn bearer_credential_goes_in_the_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/chat/completions", server.url());
    let response = transport
        .post_json(
            &url,
            &AuthScheme::Bearer("sk-test".to_string()),
            &json!({"model": "m", "messages": []}),
        )
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.body, r#"{"ok":true}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn query_key_credential_goes_in_the_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/test:generateContent")
        .match_query(mockito::Matcher::UrlEncoded(
            "key".to_string(),
            "g-test".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/models/test:generateContent", server.url());
    let response = transport
        .post_json(
            &url,
            &AuthScheme::QueryKey("g-test".to_string()),
            &json!({"contents": []}),
        )
        .await
        .unwrap();

    assert!(response.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_statuses_are_returned_not_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/chat/completions", server.url());
    let response = transport
        .post_json(&url, &AuthScheme::Bearer("sk-test".to_string()), &json!({}))
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status, 429);
    assert_eq!(response.body, "slow down");
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens here.
    let transport = HttpTransport::new().unwrap();
    let result = transport
        .post_json(
            "http://127.0.0.1:1/chat/completions",
            &AuthScheme::Bearer("sk-test".to_string()),
            &json!({}),
        )
        .await;

    assert!(result.is_err());
}
