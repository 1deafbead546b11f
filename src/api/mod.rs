//! REST API Bindings
//!
//! Thin bindings to the backend REST API, organized by resource. The shared
//! plumbing lives here: every request goes out with the session cookie,
//! 401 becomes [`ApiError::Auth`], and other failures carry the server's
//! error detail when it sends one.

mod audit;
mod auth;
mod branches;
mod clients;
mod policies;
mod users;

use std::fmt;

use leptos_paged_query::ListQuery;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Re-export all public items
pub use audit::*;
pub use auth::*;
pub use branches::*;
pub use clients::*;
pub use policies::*;
pub use users::*;

/// Rows per page for the paginated list views.
pub const PER_PAGE: u32 = 20;

/// Backend base URL, overridable at build time.
fn api_url() -> &'static str {
    option_env!("INTIA_API_URL").unwrap_or("http://localhost:8000")
}

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 401: session missing or expired. Routed to login, never inline.
    Auth,
    /// Any other non-2xx, with the server's error detail when present.
    Request { status: u16, message: String },
    /// Transport failure before any response arrived. Retry is manual.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Auth => write!(f, "Non authentifié"),
            ApiError::Request { message, .. } => write!(f, "{message}"),
            ApiError::Network(message) => write!(f, "Erreur réseau: {message}"),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Server's structured detail when the body parses, generic fallback
/// otherwise.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.detail)
        .unwrap_or_else(|_| format!("HTTP error! status: {status}"))
}

/// `skip`/`limit` plus the non-default query parameters. An empty search
/// and unset filters are omitted entirely rather than sent as "".
fn page_params(query: &ListQuery, per_page: u32) -> Vec<(String, String)> {
    let mut params = vec![
        ("skip".to_string(), query.skip(per_page).to_string()),
        ("limit".to_string(), per_page.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search".to_string(), query.search.clone()));
    }
    for (key, value) in &query.filters {
        params.push((key.clone(), value.clone()));
    }
    params
}

fn http() -> reqwest::Client {
    reqwest::Client::new()
}

/// Browser fetch only sends the session cookie with credentials included.
/// Native builds (unit tests) have no fetch layer to configure.
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

/// Sends a request and applies the shared failure taxonomy. `Ok(None)` is
/// a success with an empty body (e.g. DELETE).
async fn send(request: reqwest::RequestBuilder) -> Result<Option<String>, ApiError> {
    let response = with_credentials(request)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    if status.as_u16() == 401 {
        return Err(ApiError::Auth);
    }

    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(ApiError::Request {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        });
    }
    if body.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(body))
    }
}

/// A 2xx body that does not parse counts as "no data", not a failure.
fn decode<T: DeserializeOwned>(body: Option<String>) -> Option<T> {
    body.and_then(|text| serde_json::from_str(&text).ok())
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: &[(String, String)],
) -> Result<Option<T>, ApiError> {
    let request = http().get(format!("{}{path}", api_url())).query(params);
    Ok(decode(send(request).await?))
}

async fn post_json<T: DeserializeOwned, P: Serialize>(
    path: &str,
    payload: &P,
) -> Result<Option<T>, ApiError> {
    let request = http().post(format!("{}{path}", api_url())).json(payload);
    Ok(decode(send(request).await?))
}

async fn put_json<T: DeserializeOwned, P: Serialize>(
    path: &str,
    payload: &P,
) -> Result<Option<T>, ApiError> {
    let request = http().put(format!("{}{path}", api_url())).json(payload);
    Ok(decode(send(request).await?))
}

async fn delete(path: &str) -> Result<(), ApiError> {
    let request = http().delete(format!("{}{path}", api_url()));
    send(request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn page_params_encode_skip_and_limit_from_the_page_number() {
        let mut query = ListQuery::default();
        query.page = 3;
        let params = page_params(&query, 20);
        assert_eq!(param(&params, "skip"), Some("40"));
        assert_eq!(param(&params, "limit"), Some("20"));
    }

    #[test]
    fn empty_search_is_omitted_not_sent_blank() {
        let query = ListQuery::default();
        let params = page_params(&query, 20);
        assert_eq!(param(&params, "search"), None);

        let mut query = ListQuery::default();
        query.search = "Doe".to_string();
        let params = page_params(&query, 20);
        assert_eq!(param(&params, "search"), Some("Doe"));
    }

    #[test]
    fn filters_ride_along_as_exact_match_parameters() {
        let mut query = ListQuery::default();
        query
            .filters
            .insert("status".to_string(), "active".to_string());
        let params = page_params(&query, 20);
        assert_eq!(param(&params, "status"), Some("active"));
    }

    #[test]
    fn error_message_prefers_the_structured_detail() {
        assert_eq!(
            error_message(404, r#"{"detail": "Client not found"}"#),
            "Client not found"
        );
    }

    #[test]
    fn error_message_falls_back_on_unstructured_bodies() {
        assert_eq!(
            error_message(500, "<html>Internal Server Error</html>"),
            "HTTP error! status: 500"
        );
        assert_eq!(error_message(502, ""), "HTTP error! status: 502");
    }
}
