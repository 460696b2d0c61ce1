//! End-to-end tests for the library entry point.
//!
//! These exercise the full pipeline (input file parsing, URL validation,
//! batched probing, JSONL output) against a mock HTTP server and temp files.

use std::io::Write;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use link_status::{run_check, Config};

#[tokio::test]
async fn test_run_check_reports_and_writes_jsonl() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/good"))
            .respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/bad")).respond_with(status_code(404)),
    );

    let dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = dir.path().join("links.txt");
    let output_path = dir.path().join("results.jsonl");

    let mut input = std::fs::File::create(&input_path).expect("Failed to create input file");
    writeln!(input, "# product links").expect("write");
    writeln!(input, "p1 {}", server.url("/good")).expect("write");
    writeln!(input, "p2,{}", server.url("/bad")).expect("write");
    writeln!(input).expect("write");
    writeln!(input, "p3 ht!tp://not a url").expect("write");
    drop(input);

    let config = Config {
        file: input_path,
        batch_size: 10,
        batch_delay_ms: 0,
        timeout_ms: 5_000,
        output: Some(output_path.clone()),
        ..Default::default()
    };

    let report = run_check(config).await.expect("run_check should succeed");
    assert_eq!(report.total_targets, 2);
    assert_eq!(report.active, 1);
    assert_eq!(report.broken, 1);
    assert_eq!(report.skipped, 1);

    let output = std::fs::read_to_string(&output_path).expect("Failed to read output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    // Records come back in input order
    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON");
    assert_eq!(first["id"], "p1");
    assert_eq!(first["status"], "active");
    assert_eq!(first["http_status"], 200);
    assert!(first.get("error_type").is_none());
    assert!(first["checked_at"].is_string());

    let second: serde_json::Value = serde_json::from_str(lines[1]).expect("valid JSON");
    assert_eq!(second["id"], "p2");
    assert_eq!(second["status"], "broken");
    assert_eq!(second["http_status"], 404);
    assert_eq!(second["error_type"], "http_error");
}

#[tokio::test]
async fn test_run_check_empty_input_is_clean() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = dir.path().join("empty.txt");
    std::fs::write(&input_path, "# nothing but comments\n\n").expect("write");

    let config = Config {
        file: input_path,
        batch_delay_ms: 0,
        ..Default::default()
    };

    let report = run_check(config).await.expect("run_check should succeed");
    assert_eq!(report.total_targets, 0);
    assert_eq!(report.active, 0);
    assert_eq!(report.broken, 0);
    assert_eq!(report.skipped, 0);
}

#[tokio::test]
async fn test_run_check_missing_input_file_is_an_error() {
    let config = Config {
        file: std::path::PathBuf::from("/definitely/not/a/real/file.txt"),
        ..Default::default()
    };

    let result = run_check(config).await;
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(
        message.contains("Failed to open input file"),
        "unexpected error: {message}"
    );
}
