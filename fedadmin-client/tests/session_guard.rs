//! Login, session persistence, and route-guard behavior.

use std::net::TcpListener;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use chrono::Utc;
use fedadmin_client::{
    ApiClient, ClientConfig, ClientError, Decision, RouteGuard, SessionManager, SessionStore, api,
    guard::routes, session::SESSION_TTL_DAYS,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_with(base_url: &str, dir: &TempDir) -> Result<(ApiClient, Arc<SessionManager>)> {
    let session = Arc::new(SessionManager::new(SessionStore::new(dir.path())));
    let config = ClientConfig::new(base_url).with_state_dir(dir.path());
    let client = ApiClient::with_session(&config, Arc::clone(&session))?;
    Ok((client, session))
}

#[tokio::test]
async fn login_installs_a_seven_day_session_and_the_guard_allows() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@federation.example",
            "password": "s3cret-pass"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {
                "id": "u1",
                "name": "Admin",
                "email": "admin@federation.example",
                "role": "admin",
                "isActive": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = client_with(&server.uri(), &dir)?;

    // Unauthenticated mount redirects before any content
    assert_eq!(
        RouteGuard::new().evaluate(&session),
        Decision::Redirect(routes::LOGIN)
    );

    let user = api::auth::login(&client, "admin@federation.example", "s3cret-pass").await?;
    assert_eq!(user.id, "u1");
    assert!(session.is_authenticated());

    // Cookie-policy expiry: seven days out
    let persisted = SessionStore::new(dir.path())
        .load()
        .ok_or_else(|| anyhow!("expected persisted session"))?;
    let ttl = persisted.expires_at - Utc::now();
    assert!(ttl.num_hours() > 24 * (SESSION_TTL_DAYS - 1));
    assert!(ttl.num_hours() <= 24 * SESSION_TTL_DAYS);

    // Subsequent protected navigation succeeds without redirect
    assert_eq!(RouteGuard::new().evaluate(&session), Decision::Allow);

    // A fresh manager over the same state dir picks the session up
    let restored = SessionManager::new(SessionStore::new(dir.path()));
    assert_eq!(restored.token().as_deref(), Some("tok-1"));
    Ok(())
}

#[tokio::test]
async fn login_without_a_token_in_the_response_fails() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "welcome back" })),
        )
        .mount(&server)
        .await;

    let (client, session) = client_with(&server.uri(), &dir)?;
    let err = api::auth::login(&client, "admin@federation.example", "s3cret-pass")
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(!session.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn logout_clears_the_persisted_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let dir = TempDir::new()?;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": {
                "id": "u1",
                "name": "Admin",
                "email": "admin@federation.example",
                "role": "admin",
                "isActive": true
            }
        })))
        .mount(&server)
        .await;

    let (client, session) = client_with(&server.uri(), &dir)?;
    api::auth::login(&client, "admin@federation.example", "s3cret-pass").await?;
    assert!(session.is_authenticated());

    api::auth::logout(&client)?;
    assert!(!session.is_authenticated());
    assert!(SessionStore::new(dir.path()).load().is_none());

    assert_eq!(
        RouteGuard::new().evaluate(&session),
        Decision::Redirect(routes::LOGIN)
    );
    Ok(())
}
