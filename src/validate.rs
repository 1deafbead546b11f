//! Form Validation
//!
//! Client-side checks run before submission; a failing form never issues
//! the network call. Errors are keyed by field name and rendered under the
//! matching input.

use std::collections::BTreeMap;

use crate::api::ClientPayload;

/// Per-field validation errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Editing a field clears that field's error.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Same shape the backend accepts: something@something.tld, no whitespace
/// anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.chars().any(char::is_whitespace)
                && !domain.chars().any(char::is_whitespace)
                && matches!(
                    domain.rsplit_once('.'),
                    Some((host, tld)) if !host.is_empty() && !tld.is_empty()
                )
        }
        _ => false,
    }
}

pub fn validate_client(payload: &ClientPayload) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if payload.first_name.trim().is_empty() {
        errors.insert("first_name", "First name is required");
    }
    if payload.last_name.trim().is_empty() {
        errors.insert("last_name", "Last name is required");
    }
    if payload.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(payload.email.trim()) {
        errors.insert("email", "Invalid email format");
    }
    if payload.phone.trim().is_empty() {
        errors.insert("phone", "Phone is required");
    }
    if payload.address.trim().is_empty() {
        errors.insert("address", "Address is required");
    }
    if payload.branch_id == 0 {
        errors.insert("branch_id", "Branch is required");
    }
    errors
}

/// Raw policy form values before parsing. `editing` relaxes the fields
/// that are fixed at creation (policy number, client).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyDraft {
    pub policy_number: String,
    pub client_id: u32,
    pub kind: String,
    pub coverage: String,
    pub premium: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub editing: bool,
}

impl PolicyDraft {
    /// Parsed premium; only meaningful once validation has passed.
    pub fn premium_value(&self) -> f64 {
        self.premium.trim().parse().unwrap_or(0.0)
    }
}

pub fn validate_policy(draft: &PolicyDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if !draft.editing && draft.policy_number.trim().is_empty() {
        errors.insert("policy_number", "Policy number is required");
    }
    if !draft.editing && draft.client_id == 0 {
        errors.insert("client_id", "Client is required");
    }
    if draft.kind.trim().is_empty() {
        errors.insert("type", "Type is required");
    }
    if draft.coverage.trim().is_empty() {
        errors.insert("coverage", "Coverage is required");
    }
    match draft.premium.trim().parse::<f64>() {
        Ok(premium) if premium > 0.0 => {}
        _ => errors.insert("premium", "Valid premium amount is required"),
    }
    if draft.start_date.is_empty() {
        errors.insert("start_date", "Start date is required");
    }
    if draft.end_date.is_empty() {
        errors.insert("end_date", "End date is required");
    }
    // ISO dates compare correctly as strings.
    if !draft.start_date.is_empty()
        && !draft.end_date.is_empty()
        && draft.end_date <= draft.start_date
    {
        errors.insert("end_date", "End date must be after start date");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_payload() -> ClientPayload {
        ClientPayload {
            branch_id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+237 123 456 789".to_string(),
            address: "123 Main Street".to_string(),
            date_of_birth: None,
        }
    }

    fn policy_draft() -> PolicyDraft {
        PolicyDraft {
            policy_number: "POL-2025-001".to_string(),
            client_id: 3,
            kind: "Auto Insurance".to_string(),
            coverage: "Collision and liability".to_string(),
            premium: "150000.00".to_string(),
            start_date: "2025-01-01".to_string(),
            end_date: "2026-01-01".to_string(),
            status: "pending".to_string(),
            editing: false,
        }
    }

    #[test]
    fn complete_client_passes() {
        assert!(validate_client(&client_payload()).is_empty());
    }

    #[test]
    fn blank_required_client_fields_are_reported_per_field() {
        let mut payload = client_payload();
        payload.first_name = "  ".to_string();
        payload.phone = String::new();
        let errors = validate_client(&payload);
        assert!(errors.get("first_name").is_some());
        assert!(errors.get("phone").is_some());
        assert!(errors.get("last_name").is_none());
    }

    #[test]
    fn email_format_is_checked() {
        for bad in ["jane", "jane@doe", "@doe.com", "jane@.com", "jane@doe.", "jane d@oe.com"] {
            let mut payload = client_payload();
            payload.email = bad.to_string();
            assert!(
                validate_client(&payload).get("email").is_some(),
                "{bad} should be rejected"
            );
        }
        for good in ["jane@doe.com", "j.doe+tag@sub.example.org"] {
            let mut payload = client_payload();
            payload.email = good.to_string();
            assert!(
                validate_client(&payload).get("email").is_none(),
                "{good} should pass"
            );
        }
    }

    #[test]
    fn complete_policy_passes() {
        assert!(validate_policy(&policy_draft()).is_empty());
    }

    #[test]
    fn premium_must_parse_to_a_positive_number() {
        for bad in ["", "0", "-5", "abc"] {
            let mut draft = policy_draft();
            draft.premium = bad.to_string();
            assert!(
                validate_policy(&draft).get("premium").is_some(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn end_date_must_come_after_start_date() {
        let mut draft = policy_draft();
        draft.end_date = draft.start_date.clone();
        assert!(validate_policy(&draft).get("end_date").is_some());

        draft.end_date = "2024-12-31".to_string();
        assert!(validate_policy(&draft).get("end_date").is_some());
    }

    #[test]
    fn editing_relaxes_creation_only_fields() {
        let mut draft = policy_draft();
        draft.policy_number = String::new();
        draft.client_id = 0;
        draft.editing = true;
        assert!(validate_policy(&draft).is_empty());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "Invalid email format");
        errors.clear("email");
        assert!(errors.is_empty());
    }
}
