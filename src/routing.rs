//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{get_budgeting_page, preview_budgets, reset_budgets, save_budgets},
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    settings::{
        cancel_two_factor, get_settings_page, set_two_factor_method, toggle_two_factor,
        verify_two_factor,
    },
    transaction::get_transactions_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::BUDGETING_VIEW, get(get_budgeting_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::BUDGETS_API, post(save_budgets))
        .route(endpoints::BUDGETS_PREVIEW, post(preview_budgets))
        .route(endpoints::BUDGETS_RESET, post(reset_budgets))
        .route(endpoints::TWO_FACTOR_TOGGLE, post(toggle_two_factor))
        .route(endpoints::TWO_FACTOR_METHOD, post(set_two_factor_method))
        .route(endpoints::TWO_FACTOR_VERIFY, post(verify_two_factor))
        .route(endpoints::TWO_FACTOR_CANCEL, post(cancel_two_factor));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page, test_utils::get_header};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert_eq!(get_header(&response, "location"), endpoints::DASHBOARD_VIEW);
    }
}
