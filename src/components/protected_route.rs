//! Protected Route
//!
//! Gates every view behind a who-am-I probe. The probe re-runs on pathname
//! changes only, never on unrelated re-renders, and is skipped entirely on
//! the login screen. Failure tears the session down and routes to login
//! without rendering the protected content.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::api;
use crate::context::use_session;

const LOGIN_PATH: &str = "/login";

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let (checking, set_checking) = signal(true);
    let last_pathname = StoredValue::new(None::<String>);
    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    Effect::new(move |_| {
        let current = pathname.get();

        if current == LOGIN_PATH {
            last_pathname.set_value(Some(current));
            set_checking.set(false);
            return;
        }
        // Same route re-rendering for another reason: nothing to re-check.
        if last_pathname.with_value(|last| last.as_deref() == Some(current.as_str())) {
            return;
        }
        last_pathname.set_value(Some(current));

        set_checking.set(true);
        spawn_local(async move {
            match api::current_user().await {
                Ok(Some(user)) => {
                    session.sign_in(user);
                    set_checking.set(false);
                }
                Ok(None) | Err(_) => {
                    set_checking.set(false);
                    session.expire_to_login();
                }
            }
        });
    });

    view! {
        {move || {
            if checking.get() && pathname.get() != LOGIN_PATH {
                view! {
                    <div class="auth-checking">
                        <div class="spinner"></div>
                        <p>"Vérification de l'authentification..."</p>
                    </div>
                }
                .into_any()
            } else {
                children.with_value(|children| children()).into_any()
            }
        }}
    }
}
