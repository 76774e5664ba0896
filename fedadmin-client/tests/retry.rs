//! Retry-policy behavior of the authenticated client against a mock backend.

use std::net::TcpListener;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use fedadmin_client::{ApiClient, ClientConfig, ClientError, Session, SessionManager, SessionStore};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Admin",
        "email": "admin@federation.example",
        "role": "admin",
        "isActive": true
    })
}

fn user() -> shared::models::UserInfo {
    serde_json::from_value(user_json()).expect("valid user json")
}

/// Client with an installed session, backed by a temp state dir
fn authed_client(base_url: &str, token: &str, dir: &TempDir) -> Result<ApiClient> {
    let session = Arc::new(SessionManager::new(SessionStore::new(dir.path())));
    session.set_session(Session::new(token, user()))?;
    let config = ClientConfig::new(base_url).with_state_dir(dir.path());
    Ok(ApiClient::with_session(&config, session)?)
}

#[tokio::test]
async fn token_missing_sentinel_refreshes_once_and_retries() -> Result<()> {
    init_tracing();
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    // First attempt carries the stale token and gets the sentinel back
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(header("authorization", "Bearer stale-tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Token not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The refresh side-request uses the same stale token
    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .and(header("authorization", "Bearer stale-tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "fresh-tok", "user": user_json() })),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The single retry carries the fresh token
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(header("authorization", "Bearer fresh-tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "news": [{ "id": "n1" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "stale-tok", &dir)?;
    let body = client.get("news").await?;
    assert!(body.value.get("news").is_some());

    // The refresh overwrote the session before the retry fired
    assert_eq!(client.session().token().as_deref(), Some("fresh-tok"));
    Ok(())
}

#[tokio::test]
async fn second_sentinel_surfaces_unauthorized_without_a_third_attempt() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    // Sentinel on every attempt: initial plus exactly one retry
    Mock::given(method("GET"))
        .and(path("/members"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "token not found" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fresh-tok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "stale-tok", &dir)?;
    let err = client
        .get("members")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ClientError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn token_refreshed_sentinel_adopts_the_rotated_token() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("authorization", "Bearer old-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Token refreshed successfully",
            "token": "rotated-tok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("authorization", "Bearer rotated-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "old-tok", &dir)?;
    client.get("events").await?;

    assert_eq!(client.session().token().as_deref(), Some("rotated-tok"));
    Ok(())
}

#[tokio::test]
async fn refresh_without_a_token_in_the_verify_response_is_unauthorized() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "token not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "stale-tok", &dir)?;
    let err = client
        .get("news")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ClientError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn non_sentinel_failures_map_without_retry() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database down" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no route" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server.uri(), "tok", &dir)?;

    let err = client
        .get("news")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    match err {
        ClientError::RequestFailed { message } => assert_eq!(message, "database down"),
        other => return Err(anyhow!("unexpected error: {other}")),
    }

    let err = client
        .get("events")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ClientError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn network_failure_propagates_as_http_error() -> Result<()> {
    let dir = TempDir::new()?;
    // Nothing listens here; the connection is refused before any retry logic
    let client = authed_client("http://127.0.0.1:9", "tok", &dir)?;

    let err = client
        .get("news")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ClientError::Http(_)));
    Ok(())
}
