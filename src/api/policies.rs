//! Policy Endpoints

use leptos_paged_query::{ListQuery, Paginated};
use serde::Serialize;

use super::{delete, get_json, page_params, post_json, put_json, ApiError, PER_PAGE};
use crate::models::Policy;

/// Create body; the policy number and client are fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyCreate {
    pub policy_number: String,
    pub client_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub coverage: String,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Update body; status is only editable after creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyUpdate {
    #[serde(rename = "type")]
    pub kind: String,
    pub coverage: String,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

pub async fn list_policies(query: &ListQuery) -> Result<Paginated<Policy>, ApiError> {
    let page = get_json("/api/v1/policies", &page_params(query, PER_PAGE)).await?;
    Ok(page.unwrap_or_default())
}

pub async fn get_policy(id: u32) -> Result<Option<Policy>, ApiError> {
    get_json(&format!("/api/v1/policies/{id}"), &[]).await
}

pub async fn create_policy(payload: &PolicyCreate) -> Result<Option<Policy>, ApiError> {
    post_json("/api/v1/policies", payload).await
}

pub async fn update_policy(id: u32, payload: &PolicyUpdate) -> Result<Option<Policy>, ApiError> {
    put_json(&format!("/api/v1/policies/{id}"), payload).await
}

pub async fn delete_policy(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/v1/policies/{id}")).await
}

/// Policy count, optionally narrowed to one status, read from the
/// pagination metadata of a 1-row page.
pub async fn count_policies(status: Option<&str>) -> Result<u32, ApiError> {
    let mut query = ListQuery::default();
    if let Some(status) = status {
        query
            .filters
            .insert("status".to_string(), status.to_string());
    }
    let page: Option<Paginated<Policy>> =
        get_json("/api/v1/policies", &page_params(&query, 1)).await?;
    Ok(page.unwrap_or_default().meta.total)
}
