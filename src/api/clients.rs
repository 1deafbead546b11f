//! Client Endpoints

use leptos_paged_query::{ListQuery, Paginated};
use serde::Serialize;

use super::{delete, get_json, page_params, post_json, put_json, ApiError, PER_PAGE};
use crate::models::{Client, ClientDetail};

/// Create/update body for a client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClientPayload {
    pub branch_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

pub async fn list_clients(query: &ListQuery) -> Result<Paginated<Client>, ApiError> {
    let page = get_json("/api/v1/clients", &page_params(query, PER_PAGE)).await?;
    Ok(page.unwrap_or_default())
}

/// Detail response nests the client's policies.
pub async fn get_client(id: u32) -> Result<Option<ClientDetail>, ApiError> {
    get_json(&format!("/api/v1/clients/{id}"), &[]).await
}

pub async fn create_client(payload: &ClientPayload) -> Result<Option<Client>, ApiError> {
    post_json("/api/v1/clients", payload).await
}

pub async fn update_client(id: u32, payload: &ClientPayload) -> Result<Option<Client>, ApiError> {
    put_json(&format!("/api/v1/clients/{id}"), payload).await
}

pub async fn delete_client(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/v1/clients/{id}")).await
}

/// First 100 clients, for the policy form's client picker.
pub async fn list_client_options() -> Result<Vec<Client>, ApiError> {
    let query = ListQuery::default();
    let page: Option<Paginated<Client>> =
        get_json("/api/v1/clients", &page_params(&query, 100)).await?;
    Ok(page.unwrap_or_default().data)
}

/// Total client count, read from the pagination metadata of a 1-row page.
pub async fn count_clients() -> Result<u32, ApiError> {
    let query = ListQuery::default();
    let page: Option<Paginated<Client>> =
        get_json("/api/v1/clients", &page_params(&query, 1)).await?;
    Ok(page.unwrap_or_default().meta.total)
}
