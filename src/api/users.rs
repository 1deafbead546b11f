//! User Endpoints (admin only)

use super::{get_json, ApiError};
use crate::models::User;

/// Users come back as a bare array, no pagination envelope.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let users = get_json("/api/v1/users", &[]).await?;
    Ok(users.unwrap_or_default())
}
