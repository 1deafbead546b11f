//! Branch Endpoints

use super::{get_json, ApiError};
use crate::models::Branch;

/// Branches come back as a bare array, no pagination envelope.
pub async fn list_branches() -> Result<Vec<Branch>, ApiError> {
    let branches = get_json("/api/v1/branches", &[]).await?;
    Ok(branches.unwrap_or_default())
}
