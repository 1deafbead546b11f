//! Policy Pages
//!
//! Paginated list with debounced search and a status filter, detail, and
//! create/edit forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paged_query::{use_paged_query, ListQuery, Paginated};
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

use crate::api::{self, ApiError, PolicyCreate, PolicyUpdate};
use crate::components::{ConfirmDialog, Pagination, PolicyForm};
use crate::context::{use_session, SessionContext};
use crate::models::Policy;
use crate::validate::PolicyDraft;

#[derive(Params, PartialEq, Clone)]
struct PolicyRouteParams {
    id: Option<u32>,
}

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("all", "Tous les statuts"),
    ("active", "Active"),
    ("pending", "Pending"),
    ("cancelled", "Cancelled"),
    ("expired", "Expired"),
];

fn status_class(status: &str) -> &'static str {
    match status {
        "active" => "badge badge-active",
        "pending" => "badge badge-pending",
        "cancelled" | "expired" => "badge badge-danger",
        _ => "badge",
    }
}

/// Grouped digits the way the cards show amounts (e.g. "150 000,5").
fn format_premium(premium: f64) -> String {
    js_sys::Number::from(premium).to_locale_string("fr-FR").into()
}

async fn fetch_policies(
    session: SessionContext,
    query: ListQuery,
) -> Result<Paginated<Policy>, leptos_paged_query::FetchError> {
    api::list_policies(&query)
        .await
        .map_err(|err| session.fetch_error(err))
}

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let session = use_session();
    let list = use_paged_query(move |query| fetch_policies(session, query));
    let pending_delete = RwSignal::new(None::<Policy>);
    let (action_error, set_action_error) = signal(None::<String>);

    Effect::new(move |_| {
        list.refresh();
    });

    let delete_message = Memo::new(move |_| {
        pending_delete.get().map(|policy| {
            format!(
                "Êtes-vous sûr de vouloir supprimer la police {} ? Cette action est irréversible.",
                policy.policy_number
            )
        })
    });

    let confirm_delete = move |_| {
        let Some(policy) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_policy(policy.id).await {
                Ok(()) => {
                    set_action_error.set(None);
                    list.refresh();
                }
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_action_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="page policies-page">
            <ConfirmDialog
                title="Supprimer la police"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=move |_| pending_delete.set(None)
            />

            {move || {
                if list.loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                view! {
                    <div class="page-header">
                        <h1>"Polices d'Assurance"</h1>
                        <a class="primary-btn" href="/policies/new">"Ajouter une police"</a>
                    </div>

                    <div class="list-controls">
                        <input
                            class="search-input"
                            type="text"
                            placeholder="Rechercher des polices..."
                            node_ref=list.search_input
                            prop:value=move || list.search()
                            on:input=move |ev| list.set_search(&event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                }
                            }
                        />
                        <select
                            class="status-filter"
                            prop:value=move || list.filter("status")
                            on:change=move |ev| list.set_filter("status", &event_target_value(&ev))
                        >
                            {STATUS_OPTIONS.iter().map(|(value, label)| {
                                view! { <option value=*value>{*label}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    {move || list.error.get().or_else(|| action_error.get()).map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <div class="card-list">
                        <For
                            each=move || list.items.get()
                            key=|policy| policy.id
                            children=move |policy| {
                                let detail_href = format!("/policies/{}", policy.id);
                                let number = policy.policy_number.clone();
                                let kind = policy.kind.clone();
                                let coverage = policy.coverage.clone();
                                let status = policy.status.clone();
                                let badge = status_class(&policy.status);
                                let premium = format_premium(policy.premium);
                                let dates = format!(
                                    "Valide du {} au {}",
                                    policy.start_date, policy.end_date
                                );
                                view! {
                                    <div class="card policy-card">
                                        <div class="card-header">
                                            <div>
                                                <h3>{number}</h3>
                                                <p class="card-subtitle">{kind}</p>
                                                <div class="card-tags">
                                                    <span class=badge>{status}</span>
                                                    <span class="premium">{format!("${premium}")}</span>
                                                </div>
                                            </div>
                                            <div class="card-actions">
                                                <a class="secondary-btn" href=detail_href>"Modifier"</a>
                                                <button
                                                    class="danger-btn"
                                                    on:click=move |_| pending_delete.set(Some(policy.clone()))
                                                >
                                                    "Supprimer"
                                                </button>
                                            </div>
                                        </div>
                                        <div class="card-body">
                                            <p class="card-detail">{coverage}</p>
                                            <p class="card-detail">{dates}</p>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <Pagination meta=list.meta on_page=move |page| list.set_page(page)/>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn PolicyDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params::<PolicyRouteParams>();
    let (policy, set_policy) = signal(None::<Policy>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|params| params.id);
        spawn_local(async move {
            let Some(id) = id else {
                set_error.set(Some("Police introuvable".to_string()));
                set_loading.set(false);
                return;
            };
            set_loading.set(true);
            match api::get_policy(id).await {
                Ok(Some(found)) => {
                    set_policy.set(Some(found));
                    set_error.set(None);
                }
                Ok(None) => set_error.set(Some("Police introuvable".to_string())),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page policy-detail-page">
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-state">
                            <h1>"Erreur"</h1>
                            <p>{message}</p>
                            <a class="secondary-btn" href="/policies">"← Retour aux polices"</a>
                        </div>
                    }
                    .into_any();
                }
                match policy.get() {
                    None => view! { <div class="loading">"Chargement..."</div> }.into_any(),
                    Some(policy) => {
                        let edit_href = format!("/policies/{}/edit", policy.id);
                        view! {
                            <div class="page-header">
                                <div>
                                    <a class="back-link" href="/policies">"← Retour aux polices"</a>
                                    <h1>{policy.policy_number.clone()}</h1>
                                    <p class="page-subtitle">"Détails de la police"</p>
                                </div>
                                <a class="primary-btn" href=edit_href>"Modifier la police"</a>
                            </div>

                            <div class="card">
                                <div class="card-tags">
                                    <span class=status_class(&policy.status)>{policy.status.clone()}</span>
                                    <span class="premium">{format!("${}", format_premium(policy.premium))}</span>
                                </div>
                                <p class="card-detail">{format!("Type : {}", policy.kind)}</p>
                                <p class="card-detail">{format!("Couverture : {}", policy.coverage)}</p>
                                <p class="card-detail">
                                    {format!("Valide du {} au {}", policy.start_date, policy.end_date)}
                                </p>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
pub fn NewPolicyPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |draft: PolicyDraft| {
        set_saving.set(true);
        spawn_local(async move {
            let payload = PolicyCreate {
                policy_number: draft.policy_number.trim().to_string(),
                client_id: draft.client_id,
                kind: draft.kind.trim().to_string(),
                coverage: draft.coverage.trim().to_string(),
                premium: draft.premium_value(),
                start_date: draft.start_date.clone(),
                end_date: draft.end_date.clone(),
            };
            match api::create_policy(&payload).await {
                Ok(_) => navigate.with_value(|navigate| navigate("/policies", Default::default())),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <a class="back-link" href="/policies">"← Retour aux polices"</a>
                    <h1>"Nouvelle police"</h1>
                </div>
            </div>
            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
            <PolicyForm initial=None saving=saving on_submit=submit/>
        </div>
    }
}

#[component]
pub fn EditPolicyPage() -> impl IntoView {
    let session = use_session();
    let params = use_params::<PolicyRouteParams>();
    let navigate = StoredValue::new(use_navigate());
    let (policy, set_policy) = signal(None::<Policy>);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|params| params.id);
        spawn_local(async move {
            let Some(id) = id else {
                set_error.set(Some("Police introuvable".to_string()));
                set_loading.set(false);
                return;
            };
            match api::get_policy(id).await {
                Ok(Some(found)) => set_policy.set(Some(found)),
                Ok(None) => set_error.set(Some("Police introuvable".to_string())),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let submit = move |draft: PolicyDraft| {
        let Some(id) = policy.get_untracked().map(|policy| policy.id) else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            let payload = PolicyUpdate {
                kind: draft.kind.trim().to_string(),
                coverage: draft.coverage.trim().to_string(),
                premium: draft.premium_value(),
                start_date: draft.start_date.clone(),
                end_date: draft.end_date.clone(),
                status: draft.status.clone(),
            };
            match api::update_policy(id, &payload).await {
                Ok(_) => navigate.with_value(|navigate| {
                    navigate(&format!("/policies/{id}"), Default::default())
                }),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <a class="back-link" href="/policies">"← Retour aux polices"</a>
                    <h1>"Modifier la police"</h1>
                </div>
            </div>
            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                match policy.get() {
                    Some(policy) => view! {
                        <PolicyForm initial=Some(policy) saving=saving on_submit=submit/>
                    }
                    .into_any(),
                    None => view! { <div class="empty">"Police introuvable."</div> }.into_any(),
                }
            }}
        </div>
    }
}
