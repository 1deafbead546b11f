//! Session Context
//!
//! Explicit session handle provided via Leptos context: login installs the
//! user, logout tears it down, and a 401 anywhere expires the session back
//! to the login screen. No implicit global mutation.

use leptos::prelude::*;
use leptos_paged_query::FetchError;

use crate::api::ApiError;
use crate::models::User;
use crate::store::{SessionStateStoreFields, SessionStore};

#[derive(Clone, Copy)]
pub struct SessionContext {
    store: SessionStore,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.user().get()
    }

    /// Install the user after a successful login or who-am-I probe.
    pub fn sign_in(&self, user: User) {
        self.store.user().set(Some(user));
    }

    /// Logout teardown; the cookie is cleared server-side.
    pub fn sign_out(&self) {
        self.store.user().set(None);
    }

    /// The session is gone: drop the user and route to the login screen.
    pub fn expire_to_login(&self) {
        self.store.user().set(None);
        let _ = window().location().set_href("/login");
    }

    /// Maps a backend failure for a list fetch: 401 goes through session
    /// teardown and is never shown inline, everything else becomes the
    /// inline message.
    pub fn fetch_error(&self, err: ApiError) -> FetchError {
        match err {
            ApiError::Auth => {
                self.expire_to_login();
                FetchError::Unauthorized
            }
            other => FetchError::Message(other.to_string()),
        }
    }
}

/// Get the session context (provided by `App`)
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
