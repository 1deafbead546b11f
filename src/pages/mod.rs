//! Route Pages
//!
//! One module per route group.

mod audit;
mod branches;
mod clients;
mod dashboard;
mod home;
mod login;
mod policies;
mod users;

pub use audit::AuditPage;
pub use branches::BranchesPage;
pub use clients::{ClientDetailPage, ClientsPage, EditClientPage, NewClientPage};
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use policies::{EditPolicyPage, NewPolicyPage, PoliciesPage, PolicyDetailPage};
pub use users::UsersPage;
