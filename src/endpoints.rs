//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the account balance and spending charts.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for searching and filtering transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for setting budgets and tracking spending against them.
pub const BUDGETING_VIEW: &str = "/budgeting";
/// The page for security settings such as two-factor authentication.
pub const SETTINGS_VIEW: &str = "/settings";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for saving the daily and monthly budgets.
pub const BUDGETS_API: &str = "/api/budgets";
/// The route for live validation of a draft budget form.
pub const BUDGETS_PREVIEW: &str = "/api/budgets/preview";
/// The route for restoring the default budgets.
pub const BUDGETS_RESET: &str = "/api/budgets/reset";
/// The route for switching two-factor authentication on or off.
pub const TWO_FACTOR_TOGGLE: &str = "/api/settings/two_factor/toggle";
/// The route for choosing the two-factor verification method.
pub const TWO_FACTOR_METHOD: &str = "/api/settings/two_factor/method";
/// The route for verifying a two-factor code.
pub const TWO_FACTOR_VERIFY: &str = "/api/settings/two_factor/verify";
/// The route for abandoning two-factor setup.
pub const TWO_FACTOR_CANCEL: &str = "/api/settings/two_factor/cancel";
