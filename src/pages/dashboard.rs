//! Dashboard Page
//!
//! Overview counters pulled from the pagination metadata of 1-row list
//! fetches, so nothing heavy crosses the wire.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::use_session;

#[derive(Clone, Copy, Debug, Default)]
struct DashboardStats {
    total_clients: u32,
    total_policies: u32,
    active_policies: u32,
    branches: u32,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = async {
                let mut stats = DashboardStats::default();
                stats.total_clients = api::count_clients().await?;
                stats.total_policies = api::count_policies(None).await?;
                stats.active_policies = api::count_policies(Some("active")).await?;
                stats.branches = api::list_branches().await?.len() as u32;
                Ok::<_, ApiError>(stats)
            }
            .await;
            match loaded {
                Ok(stats) => set_stats.set(stats),
                Err(ApiError::Auth) => session.expire_to_login(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] Failed to load stats: {err}").into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1>"Tableau de bord"</h1>
                    <p class="page-subtitle">"Vue d'ensemble du système INTIA Assurance"</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Chargement..."</div> }.into_any();
                }
                let stats = stats.get();
                view! {
                    <div class="stat-grid">
                        <div class="card stat-card">
                            <p class="stat-label">"Total Clients"</p>
                            <p class="stat-value">{stats.total_clients}</p>
                            <p class="stat-hint">"Clients enregistrés"</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-label">"Polices d'Assurance"</p>
                            <p class="stat-value">{stats.total_policies}</p>
                            <p class="stat-hint">"Total des polices"</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-label">"Polices Actives"</p>
                            <p class="stat-value">{stats.active_policies}</p>
                            <p class="stat-hint">"En cours de validité"</p>
                        </div>
                        <div class="card stat-card">
                            <p class="stat-label">"Succursales"</p>
                            <p class="stat-value">{stats.branches}</p>
                            <p class="stat-hint">"Points de service"</p>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
