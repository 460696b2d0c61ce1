//! Integration tests for the single-link prober.
//!
//! These tests verify the prober's classification contract using a mock HTTP
//! server. They do not make real network requests, ensuring tests are fast
//! and reliable.
//!
//! ## Test Categories
//!
//! - **Mock-server tests**: use `httptest` for HTTP responses (status codes,
//!   redirects, HEAD/GET method handling)
//! - **Raw-socket tests**: use a plain `tokio` listener for transport-level
//!   failures (refused connections, unresponsive servers)

use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};

use link_status::{check_link, ErrorKind, LinkStatus, ProbeOptions};

fn fast_options() -> ProbeOptions {
    ProbeOptions {
        timeout: Duration::from_secs(5),
        ..ProbeOptions::default()
    }
}

#[tokio::test]
async fn test_check_link_200_is_active() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/ok")).respond_with(status_code(200)),
    );

    let client = reqwest::Client::new();
    let result = check_link(&client, &server.url("/ok").to_string(), &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Active);
    assert_eq!(result.http_status, Some(200));
    assert!(result.error_type.is_none());
}

#[tokio::test]
async fn test_check_link_404_is_broken_http_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/missing"))
            .respond_with(status_code(404)),
    );

    let client = reqwest::Client::new();
    let result = check_link(&client, &server.url("/missing").to_string(), &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, Some(404));
    assert_eq!(result.error_type, Some(ErrorKind::HttpError));
}

#[tokio::test]
async fn test_check_link_500_is_broken_http_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/error"))
            .respond_with(status_code(500)),
    );

    let client = reqwest::Client::new();
    let result = check_link(&client, &server.url("/error").to_string(), &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, Some(500));
    assert_eq!(result.error_type, Some(ErrorKind::HttpError));
}

#[tokio::test]
async fn test_check_link_follows_redirects() {
    let server = Server::run();
    let final_url = server.url("/final").to_string();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/moved"))
            .respond_with(status_code(301).append_header("Location", final_url)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/final"))
            .respond_with(status_code(200)),
    );

    // Client configured like the library's init_client: redirects followed
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to create client");
    let result = check_link(&client, &server.url("/moved").to_string(), &fast_options()).await;

    // The final hop's status governs classification
    assert_eq!(result.status, LinkStatus::Active);
    assert_eq!(result.http_status, Some(200));
}

#[tokio::test]
async fn test_check_link_head_rejected_falls_back_to_get() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/legacy"))
            .respond_with(status_code(405)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/legacy"))
            .respond_with(status_code(200).body("ok")),
    );

    let client = reqwest::Client::new();
    let result = check_link(&client, &server.url("/legacy").to_string(), &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Active);
    assert_eq!(result.http_status, Some(200));
    assert!(result.error_type.is_none());
}

#[tokio::test]
async fn test_check_link_get_fallback_error_status_wins() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/gone"))
            .respond_with(status_code(501)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .respond_with(status_code(410).body("gone")),
    );

    let client = reqwest::Client::new();
    let result = check_link(&client, &server.url("/gone").to_string(), &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, Some(410));
    assert_eq!(result.error_type, Some(ErrorKind::HttpError));
}

#[tokio::test]
async fn test_check_link_is_idempotent_against_stable_endpoint() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/stable"))
            .times(2)
            .respond_with(status_code(200)),
    );

    let client = reqwest::Client::new();
    let url = server.url("/stable").to_string();
    let first = check_link(&client, &url, &fast_options()).await;
    let second = check_link(&client, &url, &fast_options()).await;

    // Outcome depends only on live network state, not on prior calls
    assert_eq!(first.status, LinkStatus::Active);
    assert_eq!(second.status, LinkStatus::Active);
    assert_eq!(first.http_status, second.http_status);
}

#[tokio::test]
async fn test_check_link_refused_connection_is_network_error() {
    // Bind a port, then drop the listener so connections are refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/");
    let result = check_link(&client, &url, &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, None);
    assert_eq!(result.error_type, Some(ErrorKind::Network));
}

#[tokio::test]
async fn test_check_link_unresponsive_server_times_out() {
    // Accept connections but never respond, so the probe can only time out
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    tokio::spawn(async move {
        let mut sockets = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                sockets.push(socket);
            }
        }
    });

    let options = ProbeOptions {
        timeout: Duration::from_millis(500),
        ..ProbeOptions::default()
    };
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/");
    let result = check_link(&client, &url, &options).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, None);
    assert_eq!(result.error_type, Some(ErrorKind::Timeout));
    // The probe resolves at roughly the configured timeout, not the server's
    // schedule: one shared deadline covers HEAD and any fallback
    assert!(
        result.response_ms >= 450,
        "response_ms {} should be close to the 500ms timeout",
        result.response_ms
    );
    assert!(
        result.response_ms < 2_000,
        "response_ms {} should not be far beyond the 500ms timeout",
        result.response_ms
    );
}

#[tokio::test]
async fn test_check_link_invalid_url_is_broken_not_panic() {
    let client = reqwest::Client::new();
    let result = check_link(&client, "not even a url", &fast_options()).await;

    assert_eq!(result.status, LinkStatus::Broken);
    assert_eq!(result.http_status, None);
    assert!(result.error_type.is_some());
}
