//! Dashboard module
//!
//! Provides an overview page showing the account balance and the week's spending charts.

mod charts;
mod handlers;
mod summary;

pub use handlers::get_dashboard_page;
pub use summary::DashboardSnapshot;
