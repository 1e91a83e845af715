//! Integration tests for `poldeck policies list` and `poldeck policies show`.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Seeds a stored session so the policy commands carry a bearer token.
fn seed_session(dir: &TempDir, token: &str) {
    fs::write(
        dir.path().join("session.json"),
        json!({"access_token": token}).to_string(),
    )
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_policies_in_server_order() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    seed_session(&dir, "tok-abc");

    Mock::given(method("GET"))
        .and(path("/api/policies"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "policyNumber": "P-1", "status": "ACTIVE"},
            {"id": 2, "policyNumber": "P-2", "status": "EXPIRED"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let assert = cargo_bin_cmd!("poldeck")
        .env("POLDECK_HOME", dir.path())
        .args(["--api-url", &server.uri(), "policies", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P-1"))
        .stdout(predicate::str::contains("P-2"));

    // Server order is passed through unmodified.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let p1 = stdout.find("P-1").unwrap();
    let p2 = stdout.find("P-2").unwrap();
    assert!(p1 < p2);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_reports_empty_result() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    seed_session(&dir, "tok");

    Mock::given(method("GET"))
        .and(path("/api/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    cargo_bin_cmd!("poldeck")
        .env("POLDECK_HOME", dir.path())
        .args(["--api-url", &server.uri(), "policies", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No policies found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn show_prints_a_single_policy() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    seed_session(&dir, "tok");

    Mock::given(method("GET"))
        .and(path("/api/policies/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 2, "policyNumber": "P-2", "status": "EXPIRED"}
        )))
        .mount(&server)
        .await;

    cargo_bin_cmd!("poldeck")
        .env("POLDECK_HOME", dir.path())
        .args(["--api-url", &server.uri(), "policies", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number: P-2"))
        .stdout(predicate::str::contains("Status: EXPIRED"));
}

#[tokio::test(flavor = "multi_thread")]
async fn backend_failure_exits_nonzero() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    seed_session(&dir, "tok");

    Mock::given(method("GET"))
        .and(path("/api/policies"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cargo_bin_cmd!("poldeck")
        .env("POLDECK_HOME", dir.path())
        .args(["--api-url", &server.uri(), "policies", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Policy list rejected"));
}
