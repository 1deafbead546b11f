//! Session Store
//!
//! Uses Leptos reactive_stores for the app-wide session state.

use reactive_stores::Store;

use crate::models::User;

/// Session state shared across the app
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Authenticated user, installed by login or the who-am-I probe
    pub user: Option<User>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;
