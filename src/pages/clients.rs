//! Client Pages
//!
//! Paginated list with debounced search, detail with the client's
//! policies, and create/edit forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paged_query::{use_paged_query, ListQuery, Paginated};
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

use crate::api::{self, ApiError, ClientPayload};
use crate::components::{ClientForm, ConfirmDialog, Pagination};
use crate::context::{use_session, SessionContext};
use crate::models::{Client, ClientDetail};

#[derive(Params, PartialEq, Clone)]
struct ClientRouteParams {
    id: Option<u32>,
}

async fn fetch_clients(
    session: SessionContext,
    query: ListQuery,
) -> Result<Paginated<Client>, leptos_paged_query::FetchError> {
    api::list_clients(&query)
        .await
        .map_err(|err| session.fetch_error(err))
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let session = use_session();
    let list = use_paged_query(move |query| fetch_clients(session, query));
    let pending_delete = RwSignal::new(None::<Client>);
    let (action_error, set_action_error) = signal(None::<String>);

    // First page load; everything after goes through the debounced query.
    Effect::new(move |_| {
        list.refresh();
    });

    let delete_message = Memo::new(move |_| {
        pending_delete.get().map(|client| {
            format!(
                "Êtes-vous sûr de vouloir supprimer {} ? Cette action est irréversible.",
                client.full_name()
            )
        })
    });

    let confirm_delete = move |_| {
        let Some(client) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_client(client.id).await {
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
        <div class="page clients-page">
            <ConfirmDialog
                title="Supprimer le client"
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
                        <h1>"Clients"</h1>
                        <a class="primary-btn" href="/clients/new">"Ajouter un client"</a>
                    </div>

                    <input
                        class="search-input"
                        type="text"
                        placeholder="Rechercher des clients..."
                        node_ref=list.search_input
                        prop:value=move || list.search()
                        on:input=move |ev| list.set_search(&event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                            }
                        }
                    />

                    {move || list.error.get().or_else(|| action_error.get()).map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <div class="card-list">
                        <For
                            each=move || list.items.get()
                            key=|client| client.id
                            children=move |client| {
                                let name = client.full_name();
                                let detail_href = format!("/clients/{}", client.id);
                                let born = client.date_of_birth.clone();
                                let email = client.email.clone();
                                let phone = client.phone.clone();
                                let address = client.address.clone();
                                view! {
                                    <div class="card client-card">
                                        <div class="card-header">
                                            <div>
                                                <h3>{name}</h3>
                                                <p class="card-subtitle">{email}</p>
                                                <p class="card-detail">{phone}</p>
                                            </div>
                                            <div class="card-actions">
                                                <a class="secondary-btn" href=detail_href>"Modifier"</a>
                                                <button
                                                    class="danger-btn"
                                                    on:click=move |_| pending_delete.set(Some(client.clone()))
                                                >
                                                    "Supprimer"
                                                </button>
                                            </div>
                                        </div>
                                        <div class="card-body">
                                            <p class="card-detail">{address}</p>
                                            {born.map(|date| view! {
                                                <span class="badge">{format!("Né(e) le {date}")}</span>
                                            })}
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
pub fn ClientDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params::<ClientRouteParams>();
    let (detail, set_detail) = signal(None::<ClientDetail>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|params| params.id);
        spawn_local(async move {
            let Some(id) = id else {
                set_error.set(Some("Client introuvable".to_string()));
                set_loading.set(false);
                return;
            };
            set_loading.set(true);
            match api::get_client(id).await {
                Ok(Some(found)) => {
                    set_detail.set(Some(found));
                    set_error.set(None);
                }
                Ok(None) => set_error.set(Some("Client introuvable".to_string())),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page client-detail-page">
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-state">
                            <h1>"Erreur"</h1>
                            <p>{message}</p>
                            <a class="secondary-btn" href="/clients">"← Retour aux clients"</a>
                        </div>
                    }
                    .into_any();
                }
                match detail.get() {
                    None => view! { <div class="loading">"Chargement..."</div> }.into_any(),
                    Some(detail) => {
                        let client = detail.client;
                        let edit_href = format!("/clients/{}/edit", client.id);
                        view! {
                            <div class="page-header">
                                <div>
                                    <a class="back-link" href="/clients">"← Retour aux clients"</a>
                                    <h1>{client.full_name()}</h1>
                                    <p class="page-subtitle">"Détails du client"</p>
                                </div>
                                <a class="primary-btn" href=edit_href>"Modifier le client"</a>
                            </div>

                            <div class="card">
                                <h2>"Coordonnées"</h2>
                                <p class="card-detail">{format!("Email : {}", client.email)}</p>
                                <p class="card-detail">{format!("Téléphone : {}", client.phone)}</p>
                                <p class="card-detail">{format!("Adresse : {}", client.address)}</p>
                                {client.date_of_birth.clone().map(|date| view! {
                                    <p class="card-detail">{format!("Date de naissance : {date}")}</p>
                                })}
                            </div>

                            <div class="card">
                                <h2>"Polices"</h2>
                                {if detail.policies.is_empty() {
                                    view! { <p class="empty">"Aucune police pour ce client."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="policy-rows">
                                            {detail.policies.into_iter().map(|policy| view! {
                                                <li class="policy-row">
                                                    <span class="policy-number">{policy.policy_number}</span>
                                                    <span>{policy.kind}</span>
                                                    <span class="badge">{policy.status}</span>
                                                    <span>{format!("{} → {}", policy.start_date, policy.end_date)}</span>
                                                </li>
                                            }).collect_view()}
                                        </ul>
                                    }
                                    .into_any()
                                }}
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
pub fn NewClientPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |payload: ClientPayload| {
        set_saving.set(true);
        spawn_local(async move {
            match api::create_client(&payload).await {
                Ok(_) => navigate.with_value(|navigate| navigate("/clients", Default::default())),
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
                    <a class="back-link" href="/clients">"← Retour aux clients"</a>
                    <h1>"Nouveau client"</h1>
                </div>
            </div>
            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
            <ClientForm initial=None saving=saving on_submit=submit/>
        </div>
    }
}

#[component]
pub fn EditClientPage() -> impl IntoView {
    let session = use_session();
    let params = use_params::<ClientRouteParams>();
    let navigate = StoredValue::new(use_navigate());
    let (client, set_client) = signal(None::<Client>);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|params| params.id);
        spawn_local(async move {
            let Some(id) = id else {
                set_error.set(Some("Client introuvable".to_string()));
                set_loading.set(false);
                return;
            };
            match api::get_client(id).await {
                Ok(Some(detail)) => set_client.set(Some(detail.client)),
                Ok(None) => set_error.set(Some("Client introuvable".to_string())),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let submit = move |payload: ClientPayload| {
        let Some(id) = client.get_untracked().map(|client| client.id) else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_client(id, &payload).await {
                Ok(_) => navigate.with_value(|navigate| {
                    navigate(&format!("/clients/{id}"), Default::default())
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
                    <a class="back-link" href="/clients">"← Retour aux clients"</a>
                    <h1>"Modifier le client"</h1>
                </div>
            </div>
            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                match client.get() {
                    Some(client) => view! {
                        <ClientForm initial=Some(client) saving=saving on_submit=submit/>
                    }
                    .into_any(),
                    None => view! { <div class="empty">"Client introuvable."</div> }.into_any(),
                }
            }}
        </div>
    }
}
