//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod client_form;
mod confirm_dialog;
mod navigation;
mod pagination;
mod policy_form;
mod protected_route;

pub use client_form::ClientForm;
pub use confirm_dialog::ConfirmDialog;
pub use navigation::Navigation;
pub use pagination::Pagination;
pub use policy_form::PolicyForm;
pub use protected_route::ProtectedRoute;
