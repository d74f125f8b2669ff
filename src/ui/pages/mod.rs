//! Application pages module
//!
//! - Login page
//! - Register page
//! - Dashboard
//! - Not found

mod dashboard;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
