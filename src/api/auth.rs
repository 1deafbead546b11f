//! Auth Endpoints
//!
//! Login/logout and the who-am-I probe. The session itself rides in an
//! HTTP-only cookie set by the backend; the frontend never stores it.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{api_url, decode, get_json, http, send, ApiError};
use crate::models::User;

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Form-encoded credential post; the backend answers with the user and
/// sets the session cookie.
pub async fn login(username: &str, password: &str) -> Result<Option<LoginResponse>, ApiError> {
    let body = format!(
        "username={}&password={}",
        utf8_percent_encode(username, NON_ALPHANUMERIC),
        utf8_percent_encode(password, NON_ALPHANUMERIC)
    );
    let request = http()
        .post(format!("{}/api/v1/auth/login", api_url()))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(body);
    Ok(decode(send(request).await?))
}

pub async fn logout() -> Result<(), ApiError> {
    send(http().post(format!("{}/api/v1/auth/logout", api_url())))
        .await
        .map(|_| ())
}

/// Who-am-I probe used by the session guard.
pub async fn current_user() -> Result<Option<User>, ApiError> {
    get_json("/api/v1/auth/me", &[]).await
}
