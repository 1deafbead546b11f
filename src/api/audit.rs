//! Audit Log Endpoints (admin only)

use leptos_paged_query::{Paginated, FILTER_ALL};

use super::{get_json, ApiError};
use crate::models::AuditLog;

/// Latest 50 entries, optionally narrowed by action and resource type.
/// The `"all"` sentinel means unfiltered and is omitted from the request.
pub async fn list_audit_logs(
    action: &str,
    resource_type: &str,
) -> Result<Paginated<AuditLog>, ApiError> {
    let mut params = vec![
        ("skip".to_string(), "0".to_string()),
        ("limit".to_string(), "50".to_string()),
    ];
    if action != FILTER_ALL {
        params.push(("action".to_string(), action.to_string()));
    }
    if resource_type != FILTER_ALL {
        params.push(("resource_type".to_string(), resource_type.to_string()));
    }
    let page = get_json("/api/v1/audit-logs", &params).await?;
    Ok(page.unwrap_or_default())
}
