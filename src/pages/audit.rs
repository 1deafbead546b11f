//! Audit Page (admin)
//!
//! Latest audit entries with action and resource-type filters. The selects
//! refetch immediately; a request id guards against a slow response landing
//! after a newer filter change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::use_session;
use crate::models::AuditLog;

const ACTION_OPTIONS: &[(&str, &str)] = &[
    ("all", "Toutes les actions"),
    ("CREATE", "Create"),
    ("READ", "Read"),
    ("UPDATE", "Update"),
    ("DELETE", "Delete"),
    ("LOGIN", "Login"),
    ("LOGOUT", "Logout"),
];

const RESOURCE_OPTIONS: &[(&str, &str)] = &[
    ("all", "Toutes les ressources"),
    ("client", "Client"),
    ("policy", "Policy"),
    ("user", "User"),
    ("branch", "Branch"),
];

fn action_class(action: &str) -> &'static str {
    match action {
        "CREATE" | "LOGIN" => "badge badge-active",
        "UPDATE" => "badge badge-pending",
        "DELETE" | "LOGOUT" => "badge badge-danger",
        _ => "badge",
    }
}

#[component]
pub fn AuditPage() -> impl IntoView {
    let session = use_session();
    let (action_filter, set_action_filter) = signal("all".to_string());
    let (resource_filter, set_resource_filter) = signal("all".to_string());
    let (logs, set_logs) = signal(Vec::<AuditLog>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let request_id = StoredValue::new(0u64);

    // Refetch whenever a filter changes (runs once at mount too).
    Effect::new(move |_| {
        let action = action_filter.get();
        let resource = resource_filter.get();
        let issued = request_id.with_value(|id| id + 1);
        request_id.set_value(issued);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_audit_logs(&action, &resource).await;
            // A newer filter change superseded this request.
            if request_id.get_value() != issued {
                return;
            }
            match result {
                Ok(page) => {
                    set_logs.set(page.data);
                    set_error.set(None);
                }
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page audit-page">
            <div class="page-header">
                <div>
                    <h1>"Journal d'audit"</h1>
                    <p class="page-subtitle">"Historique des actions du système"</p>
                </div>
            </div>

            <div class="list-controls">
                <select
                    class="audit-filter"
                    prop:value=move || action_filter.get()
                    on:change=move |ev| set_action_filter.set(event_target_value(&ev))
                >
                    {ACTION_OPTIONS.iter().map(|(value, label)| {
                        view! { <option value=*value>{*label}</option> }
                    }).collect_view()}
                </select>

                <select
                    class="audit-filter"
                    prop:value=move || resource_filter.get()
                    on:change=move |ev| set_resource_filter.set(event_target_value(&ev))
                >
                    {RESOURCE_OPTIONS.iter().map(|(value, label)| {
                        view! { <option value=*value>{*label}</option> }
                    }).collect_view()}
                </select>
            </div>

            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                view! {
                    <div class="card-list">
                        <For
                            each=move || logs.get()
                            key=|log| log.id
                            children=move |log| {
                                let title = format!("{} - {}", log.action, log.resource_type);
                                let ids = format!(
                                    "Ressource #{} | Utilisateur #{}",
                                    log.resource_id, log.user_id
                                );
                                let ip = log.ip_address.clone();
                                let agent = log.user_agent.clone();
                                view! {
                                    <div class="card audit-card">
                                        <div class="card-header">
                                            <div>
                                                <h3>{title}</h3>
                                                <p class="card-subtitle">{ids}</p>
                                            </div>
                                            <div class="card-tags">
                                                <span class=action_class(&log.action)>{log.action.clone()}</span>
                                                <span class="timestamp">{log.timestamp.clone()}</span>
                                            </div>
                                        </div>
                                        <div class="card-body">
                                            {ip.map(|ip| view! {
                                                <p class="card-detail">{format!("IP : {ip}")}</p>
                                            })}
                                            {agent.map(|agent| view! {
                                                <p class="card-detail">{format!("Agent : {agent}")}</p>
                                            })}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
