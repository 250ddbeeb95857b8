//! Request validation and method handling over the HTTP surface.

mod common;

use axum::http::{StatusCode, header};
use common::index::head_barrel_hash;
use common::{TestServer, get_json, request};

#[tokio::test]
async fn invalid_fields_are_reported_together() {
    let server = TestServer::new().await;
    // Bad owner, bad name (space), and bad revision in one request.
    let (status, json) = get_json(
        &server.router,
        "/packages/bad!owner/na%20me/barrel?rev=not-a-revision",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], 400);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("invalid package owner"), "{message}");
    assert!(message.contains("invalid package name"), "{message}");
    assert!(message.contains("invalid revision"), "{message}");
}

#[tokio::test]
async fn owner_length_and_charset_limits_apply() {
    let server = TestServer::new().await;
    let long_owner = "a".repeat(40);
    let (status, _json) = get_json(&server.router, &format!("/packages/{long_owner}/name")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Underscores are fine in names, not owners.
    let (status, _json) = get_json(&server.router, "/packages/under_score/name").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reserved_and_git_names_rejected() {
    let server = TestServer::new().await;
    for name in ["..", "repo.git"] {
        let (status, _json) = get_json(&server.router, &format!("/packages/owner/{name}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{name}");
    }
    // The .git check is case-sensitive; .GIT passes name validation.
    let (status, _json) = get_json(&server.router, "/packages/owner/repo.GIT").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn barrel_hash_must_be_64_hexits() {
    let server = TestServer::new().await;
    for barrel in ["abc".to_string(), "zz".repeat(32), "ab".repeat(33)] {
        let (status, json) = get_json(&server.router, &format!("/barrels/{barrel}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{barrel}");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("invalid barrel name"), "{message}");
    }
}

#[tokio::test]
async fn wrong_extension_is_a_validation_error() {
    let server = TestServer::new().await;
    let hash = head_barrel_hash();
    let (status, json) = get_json(&server.router, &format!("/barrels/{hash}.zip")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("'barrel'"), "{message}");
    assert!(message.contains("'zip'"), "{message}");
}

#[tokio::test]
async fn direct_artifact_missing_scope_reports_both_fields() {
    let server = TestServer::new().await;
    let (status, json) = get_json(&server.router, "/artifacts/0123456789abcdef").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("invalid package owner"), "{message}");
    assert!(message.contains("invalid package name"), "{message}");
}

#[tokio::test]
async fn artifact_hash_must_be_16_hexits() {
    let server = TestServer::new().await;
    let (status, _json) = get_json(
        &server.router,
        "/artifacts/0123456789abcdef00?owner=o&repo=r",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn output_filters_are_validated() {
    let server = TestServer::new().await;
    let rev = "a".repeat(40);

    let uri = format!("/packages/o/r/revisions/{rev}/outputs?platform=bad%20platform");
    let (status, json) = get_json(&server.router, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("invalid platform"), "{message}");

    let uri = format!("/packages/o/r/revisions/{rev}/outputs?toolchain=bad%7Ctoolchain");
    let (status, json) = get_json(&server.router, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("invalid toolchain"), "{message}");
}

#[tokio::test]
async fn non_get_methods_are_405_with_allow() {
    let server = TestServer::new().await;
    for (method, uri) in [
        ("POST", "/packages/leanprover/lean4".to_string()),
        ("PUT", format!("/barrels/{}", head_barrel_hash())),
        ("DELETE", "/packages/leanprover/lean4/barrel".to_string()),
    ] {
        let (status, headers, body) = request(&server.router, method, &uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(headers[header::ALLOW], "GET");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["status"], 405);
    }
}

#[tokio::test]
async fn head_requests_hit_the_get_handlers() {
    let server = TestServer::new().await;
    let hash = head_barrel_hash();
    server.seed(&format!("b1/{hash}.barrel"), b"archive").await;

    let (status, headers, _body) =
        request(&server.router, "HEAD", &format!("/barrels/{hash}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_LENGTH], "7");
}

#[tokio::test]
async fn validation_runs_before_index_lookup() {
    // Even with a broken index, malformed requests stay 400.
    let server = TestServer::with_failing_index(500).await;
    let (status, _json) = get_json(&server.router, "/packages/bad!owner/name").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
