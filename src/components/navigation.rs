//! Navigation Bar
//!
//! Top navigation with active-route highlighting and logout. Hidden on the
//! login screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::api;
use crate::context::use_session;

/// (label, href) pairs for the main sections
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Tableau de bord", "/dashboard"),
    ("Clients", "/clients"),
    ("Assurances", "/policies"),
    ("Succursales", "/branches"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let logout = move |_| {
        spawn_local(async move {
            // Best effort: the cookie may already be gone.
            if let Err(err) = api::logout().await {
                web_sys::console::error_1(&format!("[NAV] Logout failed: {err}").into());
            }
            session.sign_out();
            let _ = window().location().set_href("/login");
        });
    };

    view! {
        <Show when=move || pathname.get() != "/login">
            <nav class="main-nav">
                <div class="nav-inner">
                    <a class="nav-brand" href="/">"INTIA Assurance"</a>

                    <div class="nav-links">
                        {NAV_ITEMS.iter().map(|(label, href)| {
                            let href = *href;
                            let active = move || {
                                let current = pathname.get();
                                current == href || current.starts_with(&format!("{href}/"))
                            };
                            view! {
                                <a
                                    href=href
                                    class=move || if active() { "nav-link active" } else { "nav-link" }
                                >
                                    {*label}
                                </a>
                            }
                        }).collect_view()}
                    </div>

                    <div class="nav-session">
                        {move || session.current_user().map(|user| view! {
                            <span class="nav-user">{user.username}</span>
                        })}
                        <button class="logout-btn" on:click=logout>"Déconnexion"</button>
                    </div>
                </div>
            </nav>
        </Show>
    }
}
