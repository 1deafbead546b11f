//! Branches Page
//!
//! Plain unpaginated list of agency branches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::use_session;
use crate::models::Branch;

#[component]
pub fn BranchesPage() -> impl IntoView {
    let session = use_session();
    let (branches, set_branches) = signal(Vec::<Branch>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_branches().await {
                Ok(loaded) => set_branches.set(loaded),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page branches-page">
            <div class="page-header">
                <div>
                    <h1>"Succursales"</h1>
                    <p class="page-subtitle">"Liste des succursales INTIA Assurance"</p>
                </div>
            </div>

            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        <For
                            each=move || branches.get()
                            key=|branch| branch.id
                            children=move |branch| {
                                view! {
                                    <div class="card branch-card">
                                        <div class="card-header">
                                            <h3>{branch.name.clone()}</h3>
                                            <span class="badge">{branch.code.clone()}</span>
                                        </div>
                                        <div class="card-body">
                                            <p class="card-detail">{branch.address.clone()}</p>
                                            <p class="card-detail">{branch.phone.clone()}</p>
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
