//! Authenticated HTTP client
//!
//! Wraps every backend call with bearer auth from the session manager and a
//! bounded recovery path for the backend's two token sentinels: a
//! token-not-found body triggers one refresh side-request, a token-refreshed
//! body adopts the delivered token. Either way the original request is
//! retried at most once; the budget is shared across both paths and
//! exhaustion is structural in [`RetryState`].

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode, header::AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;
use shared::response::ApiBody;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::{SessionManager, SessionStore};

/// Refresh side-request path; hit with the stale token to obtain a fresh one
pub const VERIFY_PATH: &str = "auth/verify";

/// Retry policy states. There is no arm that retries twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryState {
    /// First attempt, refresh still available
    Initial,
    /// The single retry has been spent
    Retried,
}

/// Text fields plus at most one staged file, rebuildable for the retry path.
/// `reqwest::multipart::Form` is consumed on send, so the raw parts are kept
/// here and a fresh form is assembled per attempt.
#[derive(Debug, Clone, Default)]
pub struct MultipartFields {
    texts: Vec<(String, String)>,
    file: Option<FilePart>,
}

/// A staged upload
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MultipartFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    /// Append both sides of a bilingual field using bracket notation
    /// (`name[ar]`, `name[en]`), the shape the backend's form parser expects
    pub fn bilingual(&mut self, name: &str, value: &shared::Bilingual) -> &mut Self {
        self.text(format!("{name}[ar]"), value.ar.clone());
        self.text(format!("{name}[en]"), value.en.clone())
    }

    /// Stage the file part. Callers that skip this preserve whatever image the
    /// backend already has for the record.
    pub fn file(&mut self, part: FilePart) -> &mut Self {
        self.file = Some(part);
        self
    }

    pub fn texts(&self) -> &[(String, String)] {
        &self.texts
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    fn to_form(&self) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.texts {
            form = form.text(name.clone(), value.clone());
        }
        if let Some(file) = &self.file {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            form = form.part(file.field.clone(), part);
        }
        Ok(form)
    }
}

/// Request payload, rebuildable so the retry can resend it
#[derive(Debug, Clone)]
enum Payload {
    None,
    Json(Value),
    Multipart(MultipartFields),
}

/// HTTP client for the federation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_scheme: String,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a client from configuration, seeding the session from disk
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let session = Arc::new(SessionManager::new(SessionStore::new(&config.state_dir)));
        Self::with_session(config, session)
    }

    /// Create a client sharing an existing session manager
    pub fn with_session(
        config: &ClientConfig,
        session: Arc<SessionManager>,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme.clone(),
            session,
        })
    }

    /// The shared session manager
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self, token: &str) -> String {
        format!("{} {}", self.auth_scheme, token)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> ClientResult<ApiBody> {
        self.execute(Method::GET, path, Payload::None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ApiBody> {
        let value = serde_json::to_value(body)?;
        self.execute(Method::POST, path, Payload::Json(value)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ApiBody> {
        let value = serde_json::to_value(body)?;
        self.execute(Method::PUT, path, Payload::Json(value)).await
    }

    /// Make a POST request with multipart form data
    pub async fn post_multipart(
        &self,
        path: &str,
        fields: &MultipartFields,
    ) -> ClientResult<ApiBody> {
        self.execute(Method::POST, path, Payload::Multipart(fields.clone()))
            .await
    }

    /// Make a PUT request with multipart form data
    pub async fn put_multipart(
        &self,
        path: &str,
        fields: &MultipartFields,
    ) -> ClientResult<ApiBody> {
        self.execute(Method::PUT, path, Payload::Multipart(fields.clone()))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<ApiBody> {
        self.execute(Method::DELETE, path, Payload::None).await
    }

    /// Sends the request, recovering once from a token sentinel
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> ClientResult<ApiBody> {
        let mut state = RetryState::Initial;
        let mut token = self.session.token();

        loop {
            let body = self
                .send_once(method.clone(), path, &payload, token.as_deref())
                .await?;

            if let Some(rotated) = body.refreshed_token() {
                match state {
                    RetryState::Initial => {
                        tracing::info!(%path, "backend rotated token, retrying once");
                        // The session is overwritten before the retry fires
                        self.session.adopt_token(rotated)?;
                        token = Some(rotated.to_string());
                        state = RetryState::Retried;
                        continue;
                    }
                    RetryState::Retried => return Err(ClientError::Unauthorized),
                }
            }

            if body.is_token_missing() {
                match state {
                    RetryState::Initial => {
                        let stale = token.clone().unwrap_or_default();
                        token = Some(self.refresh_session(&stale).await?);
                        state = RetryState::Retried;
                        continue;
                    }
                    RetryState::Retried => return Err(ClientError::Unauthorized),
                }
            }

            let status = StatusCode::from_u16(body.status)
                .map_err(|_| ClientError::InvalidResponse(format!("status {}", body.status)))?;
            if status.is_success() {
                return Ok(body);
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body.error_message())),
                _ => Err(ClientError::RequestFailed {
                    message: body.error_message(),
                }),
            };
        }
    }

    /// One attempt: build, send, parse. A body that is not JSON (empty
    /// deletes, proxy error pages) parses as null rather than failing.
    async fn send_once(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
        token: Option<&str>,
    ) -> ClientResult<ApiBody> {
        let mut request = self.client.request(method, self.url(path));

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, self.auth_header(token));
        }

        request = match payload {
            Payload::None => request,
            Payload::Json(value) => request.json(value),
            Payload::Multipart(fields) => request.multipart(fields.to_form()?),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(ApiBody::new(status, value))
    }

    /// The refresh cycle for a token-not-found sentinel: one side request to
    /// the verify endpoint with the stale token, session overwritten with the
    /// fresh one. Serialized so racing callers refresh once.
    async fn refresh_session(&self, stale_token: &str) -> ClientResult<String> {
        let _guard = self.session.refresh_guard().await;

        if let Some(current) = self.session.token() {
            if current != stale_token {
                tracing::debug!("session already refreshed by a concurrent caller");
                return Ok(current);
            }
        }

        tracing::info!("token rejected by backend, refreshing session");
        let response = self
            .client
            .get(self.url(VERIFY_PATH))
            .header(AUTHORIZATION, self.auth_header(stale_token))
            .send()
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let body = ApiBody::new(status, value);

        let Some(fresh) = body.token() else {
            tracing::warn!(status, "refresh yielded no token, surfacing unauthorized");
            return Err(ClientError::Unauthorized);
        };

        self.session.adopt_token(fresh)?;
        Ok(fresh.to_string())
    }
}
