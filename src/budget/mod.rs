//! Budgeting: daily and monthly budgets and progress against them.

mod core;
mod page;
mod view;

pub use self::core::{BudgetTracking, Budgets};
pub use page::{get_budgeting_page, preview_budgets, reset_budgets, save_budgets};
