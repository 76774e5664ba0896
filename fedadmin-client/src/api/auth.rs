//! Auth API

use serde::{Deserialize, Serialize};
use shared::models::UserInfo;
use shared::response::extract_record;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::session::Session;

pub const LOGIN: &str = "auth/login";
pub const FORGOT_PASSWORD: &str = "auth/forgot-password";
pub const RESET_PASSWORD: &str = "auth/reset-password";

const USER_KEYS: &[&str] = &["user", "data"];

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login with email and password. On success the session (token plus cached
/// profile, 7-day expiry) is installed before this returns.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ClientResult<UserInfo> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let body = client.post_json(LOGIN, &request).await?;
    let token = body
        .token()
        .ok_or_else(|| ClientError::InvalidResponse("login response missing token".to_string()))?
        .to_string();
    let user: UserInfo = extract_record(&body.value, USER_KEYS)?;

    client.session().set_session(Session::new(token, user.clone()))?;
    tracing::info!(email = %user.email, "logged in");
    Ok(user)
}

/// Fetch the canonical profile for the current token. This is also the side
/// request the refresh path uses.
pub async fn verify(client: &ApiClient) -> ClientResult<UserInfo> {
    let body = client.get(crate::http::VERIFY_PATH).await?;
    let user = extract_record(&body.value, USER_KEYS)?;
    Ok(user)
}

/// Request a password-reset email
pub async fn forgot_password(client: &ApiClient, email: &str) -> ClientResult<()> {
    #[derive(Serialize)]
    struct ForgotRequest<'a> {
        email: &'a str,
    }

    client
        .post_json(FORGOT_PASSWORD, &ForgotRequest { email })
        .await?;
    Ok(())
}

/// Complete a password reset with the emailed token
pub async fn reset_password(
    client: &ApiClient,
    reset_token: &str,
    new_password: &str,
) -> ClientResult<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ResetRequest<'a> {
        token: &'a str,
        new_password: &'a str,
    }

    client
        .post_json(
            RESET_PASSWORD,
            &ResetRequest {
                token: reset_token,
                new_password,
            },
        )
        .await?;
    Ok(())
}

/// Drop the session. Purely client-side; the backend holds no session state.
pub fn logout(client: &ApiClient) -> ClientResult<()> {
    tracing::info!("logged out");
    client.session().clear()
}
