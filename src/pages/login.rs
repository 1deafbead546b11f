//! Login Page
//!
//! Username/password form posting form-encoded credentials. Success
//! installs the user in the session and moves on to the dashboard; a 401
//! here means bad credentials and is the one place it shows inline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new(use_navigate());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user_value = username.get();
        let pass_value = password.get();
        if user_value.is_empty() || pass_value.is_empty() {
            set_error.set(Some("Identifiant et mot de passe requis".to_string()));
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::login(&user_value, &pass_value).await {
                Ok(Some(response)) => {
                    session.sign_in(response.user);
                    navigate.with_value(|navigate| navigate("/dashboard", Default::default()));
                }
                Ok(None) => {
                    set_error.set(Some("Réponse inattendue du serveur".to_string()));
                }
                Err(ApiError::Auth) => {
                    set_error.set(Some(
                        "Nom d'utilisateur ou mot de passe incorrect".to_string(),
                    ));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page login-page">
            <div class="login-box">
                <h1>"INTIA Assurance"</h1>
                <p class="page-subtitle">"Connectez-vous pour continuer"</p>

                <form class="login-form" on:submit=submit>
                    <div class="form-field">
                        <label>"Nom d'utilisateur"</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label>"Mot de passe"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
