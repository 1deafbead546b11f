//! Users Page (admin)
//!
//! Plain list of system users with role and activity badges.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::use_session;
use crate::models::User;

fn role_class(role: &str) -> &'static str {
    match role {
        "ADMIN" => "badge badge-danger",
        "AGENT" => "badge badge-active",
        "VIEWER" => "badge badge-pending",
        _ => "badge",
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_users().await {
                Ok(loaded) => set_users.set(loaded),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page users-page">
            <div class="page-header">
                <div>
                    <h1>"Gestion des utilisateurs"</h1>
                    <p class="page-subtitle">"Gérer les utilisateurs du système"</p>
                </div>
            </div>

            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                view! {
                    <div class="card-list">
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| {
                                view! {
                                    <div class="card user-card">
                                        <div class="card-header">
                                            <div>
                                                <h3>{user.username.clone()}</h3>
                                                <p class="card-subtitle">{user.email.clone()}</p>
                                            </div>
                                            <div class="card-tags">
                                                <span class=role_class(&user.role)>{user.role.clone()}</span>
                                                {if user.is_active {
                                                    view! { <span class="badge badge-active">"Actif"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge">"Inactif"</span> }.into_any()
                                                }}
                                            </div>
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
