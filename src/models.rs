//! Frontend Models
//!
//! Data structures matching the backend API payloads. The backend owns
//! every record; the frontend only holds a read-through copy for the
//! duration of one render cycle.

use serde::{Deserialize, Serialize};

/// Client record (matches backend `ClientResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub branch_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Policy record (matches backend `PolicyResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: u32,
    pub policy_number: String,
    pub client_id: u32,
    pub branch_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub coverage: String,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Slim policy row nested in the client detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub id: u32,
    pub policy_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub premium: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Client detail nests the client's policies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientDetail {
    pub client: Client,
    #[serde(default)]
    pub policies: Vec<PolicySummary>,
}

/// Branch record (matches backend `BranchResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub address: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

/// User record (matches backend `UserResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub branch_id: Option<u32>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Audit trail entry (admin only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: u32,
    pub user_id: u32,
    pub action: String,
    pub resource_type: String,
    pub resource_id: u32,
    #[serde(default)]
    pub old_values: Option<serde_json::Value>,
    #[serde(default)]
    pub new_values: Option<serde_json::Value>,
    pub timestamp: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_paged_query::Paginated;

    #[test]
    fn policy_type_field_maps_to_kind() {
        let policy: Policy = serde_json::from_str(
            r#"{
                "id": 7,
                "policy_number": "POL-2025-001",
                "client_id": 3,
                "branch_id": 1,
                "type": "Auto Insurance",
                "coverage": "Collision and liability",
                "premium": 150000.5,
                "start_date": "2025-01-01",
                "end_date": "2026-01-01",
                "status": "active",
                "created_at": "2025-01-01T10:00:00",
                "updated_at": "2025-01-01T10:00:00"
            }"#,
        )
        .expect("policy should decode");
        assert_eq!(policy.kind, "Auto Insurance");
        assert_eq!(policy.premium, 150000.5);
    }

    #[test]
    fn paginated_envelope_decodes_data_and_meta() {
        let page: Paginated<Client> = serde_json::from_str(
            r#"{
                "data": [{
                    "id": 1,
                    "branch_id": 2,
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "email": "jane.doe@example.com",
                    "phone": "+237 123 456 789",
                    "address": "123 Main Street",
                    "date_of_birth": null,
                    "created_at": "2025-01-01T10:00:00",
                    "updated_at": "2025-01-02T10:00:00"
                }],
                "meta": {"page": 2, "per_page": 20, "total": 41, "total_pages": 3}
            }"#,
        )
        .expect("page should decode");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].full_name(), "Jane Doe");
        assert!(page.data[0].date_of_birth.is_none());
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn audit_log_tolerates_missing_optional_fields() {
        let log: AuditLog = serde_json::from_str(
            r#"{
                "id": 9,
                "user_id": 1,
                "action": "DELETE",
                "resource_type": "client",
                "resource_id": 4,
                "timestamp": "2025-02-01T08:30:00"
            }"#,
        )
        .expect("audit log should decode");
        assert!(log.old_values.is_none());
        assert!(log.ip_address.is_none());
    }
}
