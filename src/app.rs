//! INTIA Assurance Frontend App
//!
//! Router, session wiring, and the protected layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Navigation, ProtectedRoute};
use crate::context::SessionContext;
use crate::pages::{
    AuditPage, BranchesPage, ClientDetailPage, ClientsPage, DashboardPage, EditClientPage,
    EditPolicyPage, HomePage, LoginPage, NewClientPage, NewPolicyPage, PoliciesPage,
    PolicyDetailPage, UsersPage,
};
use crate::store::SessionState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SessionState::default());
    provide_context(store);
    provide_context(SessionContext::new(store));

    view! {
        <Router>
            <ProtectedRoute>
                <Navigation/>
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Page introuvable."</p> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/clients") view=ClientsPage/>
                        <Route path=path!("/clients/new") view=NewClientPage/>
                        <Route path=path!("/clients/:id") view=ClientDetailPage/>
                        <Route path=path!("/clients/:id/edit") view=EditClientPage/>
                        <Route path=path!("/policies") view=PoliciesPage/>
                        <Route path=path!("/policies/new") view=NewPolicyPage/>
                        <Route path=path!("/policies/:id") view=PolicyDetailPage/>
                        <Route path=path!("/policies/:id/edit") view=EditPolicyPage/>
                        <Route path=path!("/branches") view=BranchesPage/>
                        <Route path=path!("/admin/users") view=UsersPage/>
                        <Route path=path!("/admin/audit") view=AuditPage/>
                    </Routes>
                </main>
            </ProtectedRoute>
        </Router>
    }
}
