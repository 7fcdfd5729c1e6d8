//! Integration tests against a mock HTTP server.

use github_user_details::{Error, UserDetailsClient};
use mockito::{Mock, ServerGuard};

const RESET: &str = "1468016793";

async fn mock_user(
    server: &mut ServerGuard,
    username: &str,
    status: usize,
    remaining: &str,
    body: &str,
) -> Mock {
    server
        .mock("GET", format!("/users/{}", username).as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_header("x-ratelimit-limit", "5000")
        .with_header("x-ratelimit-remaining", remaining)
        .with_header("x-ratelimit-reset", RESET)
        .with_body(body)
        .create_async()
        .await
}

fn test_client(server: &ServerGuard) -> UserDetailsClient {
    UserDetailsClient::builder()
        .base_url_override(server.url())
        .useragent("test-agent")
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn resolves_every_username_into_the_report() {
    let mut server = mockito::Server::new_async().await;
    let m1 = mock_user(
        &mut server,
        "kgryte",
        200,
        "4999",
        r#"{"login":"kgryte","id":2658211}"#,
    )
    .await;
    let m2 = mock_user(
        &mut server,
        "planeshifter",
        200,
        "4998",
        r#"{"login":"planeshifter","id":1913638}"#,
    )
    .await;

    let outcome = test_client(&server)
        .fetch_details(vec!["kgryte".to_string(), "planeshifter".to_string()])
        .await
        .expect("batch query failed");

    m1.assert_async().await;
    m2.assert_async().await;

    let report = outcome.report;
    assert_eq!(report.meta.total, 2);
    assert_eq!(report.meta.success, 2);
    assert_eq!(report.meta.failure, 0);
    assert_eq!(report.data["kgryte"]["id"], 2658211);
    assert_eq!(report.data["planeshifter"]["login"], "planeshifter");
    assert!(report.failures.is_empty());

    // Same reset window: the snapshot converges to the minimum remaining.
    let rate_limit = outcome.rate_limit.expect("missing rate limit snapshot");
    assert_eq!(rate_limit.limit, 5000);
    assert_eq!(rate_limit.remaining, 4998);
}

#[tokio::test]
async fn an_unknown_username_is_recorded_and_the_batch_continues() {
    let mut server = mockito::Server::new_async().await;
    let _m1 = mock_user(
        &mut server,
        "kgryte",
        200,
        "4999",
        r#"{"login":"kgryte"}"#,
    )
    .await;
    let _m2 = mock_user(
        &mut server,
        "unknown_username",
        404,
        "4998",
        r#"{"message":"Not Found","documentation_url":"https://developer.github.com/v3"}"#,
    )
    .await;

    let outcome = test_client(&server)
        .fetch_details(vec!["kgryte".to_string(), "unknown_username".to_string()])
        .await
        .expect("batch query failed");

    let report = outcome.report;
    assert_eq!(report.meta.total, 2);
    assert_eq!(report.meta.success, 1);
    assert_eq!(report.meta.failure, 1);
    assert_eq!(report.failures["unknown_username"], "Not Found");
    assert!(!report.data.contains_key("unknown_username"));
}

#[tokio::test]
async fn a_response_without_rate_limit_headers_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/users/kgryte")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let err = test_client(&server)
        .fetch_details(vec!["kgryte".to_string()])
        .await
        .expect_err("expected a fatal error");

    assert!(matches!(err, Error::Remote { status: 500, .. }));
}

#[tokio::test]
async fn forwards_token_and_useragent_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/kgryte")
        .match_header("authorization", "token abcdefg")
        .match_header("user-agent", "beeper-booper")
        .match_header("accept", "application/vnd.github.v3+json")
        .with_status(200)
        .with_header("x-ratelimit-limit", "5000")
        .with_header("x-ratelimit-remaining", "4999")
        .with_header("x-ratelimit-reset", RESET)
        .with_body(r#"{"login":"kgryte"}"#)
        .create_async()
        .await;

    let client = UserDetailsClient::builder()
        .base_url_override(server.url())
        .token("abcdefg")
        .useragent("beeper-booper")
        .build()
        .expect("failed to build client");

    client
        .fetch_details(vec!["kgryte".to_string()])
        .await
        .expect("batch query failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn a_failure_body_without_a_message_falls_back_to_the_status_reason() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_user(&mut server, "kgryte", 403, "0", "not json").await;

    let outcome = test_client(&server)
        .fetch_details(vec!["kgryte".to_string()])
        .await
        .expect("batch query failed");

    assert_eq!(outcome.report.failures["kgryte"], "Forbidden");
    assert_eq!(outcome.rate_limit.unwrap().remaining, 0);
}
