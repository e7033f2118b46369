//! Dashboard HTTP handlers and view rendering.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    dashboard::{
        charts::{build_dashboard_charts, charts_script, charts_view},
        summary::{AccountSummary, DashboardSnapshot},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub snapshot: Arc<DashboardSnapshot>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            snapshot: state.dashboard.clone(),
        }
    }
}

/// Display a page with the account balance and the week's spending.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    dashboard_view(&state.snapshot).into_response()
}

fn dashboard_view(snapshot: &DashboardSnapshot) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let charts = build_dashboard_charts(snapshot);

    let content = html!(
        (nav_bar)

        main
            id="main"
            role="main"
            aria-labelledby="dashboard-title"
            class=(PAGE_CONTAINER_STYLE)
        {
            h2 id="dashboard-title" class="sr-only" { "Dashboard" }

            (balance_card_view(&snapshot.summary))
            (charts_view(&charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

fn balance_card_view(summary: &AccountSummary) -> Markup {
    html!(
        section
            id="balance"
            aria-labelledby="balance-heading"
            class="relative overflow-hidden rounded-2xl bg-white border
                border-gray-200 dark:bg-gray-800 dark:border-gray-700"
        {
            div
                aria-hidden="true"
                class="absolute inset-0 pointer-events-none bg-gradient-to-br
                    from-blue-50 via-transparent to-emerald-50 dark:opacity-10"
            {}

            div class="p-6 relative"
            {
                h2 id="balance-heading" class="text-sm font-medium text-gray-600 dark:text-gray-300"
                {
                    "Account Balance"
                }

                p data-balance="true" class="mt-2 text-3xl md:text-4xl font-semibold"
                {
                    (format_currency(summary.balance))
                }

                dl class="mt-4 grid grid-cols-2 gap-4 max-w-md" aria-label="Income and expenses summary"
                {
                    div class="rounded-lg p-3 bg-blue-50 dark:bg-blue-900/30"
                    {
                        dt class="text-xs text-blue-700 dark:text-blue-300" { "Income" }
                        dd class="text-base font-semibold text-blue-900 dark:text-blue-100"
                        {
                            (format_currency(summary.income))
                        }
                    }

                    div class="rounded-lg p-3 bg-emerald-50 dark:bg-emerald-900/30"
                    {
                        dt class="text-xs text-emerald-700 dark:text-emerald-300" { "Expenses" }
                        dd class="text-base font-semibold text-emerald-900 dark:text-emerald-100"
                        {
                            (format_currency(summary.expenses))
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode};
    use scraper::{Html, Selector};

    use crate::{
        dashboard::{handlers::DashboardState, summary::DashboardSnapshot},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::get_dashboard_page;

    fn get_state() -> DashboardState {
        DashboardState {
            snapshot: Arc::new(DashboardSnapshot::sample()),
        }
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let response = get_dashboard_page(State(get_state())).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_chart_exists(&html, "daily-spending-chart");
        assert_chart_exists(&html, "weekly-progress-chart");
    }

    #[tokio::test]
    async fn shows_balance_income_and_expenses() {
        let response = get_dashboard_page(State(get_state())).await;
        let html = parse_html_document(response).await;

        let balance = html
            .select(&Selector::parse("p[data-balance]").unwrap())
            .next()
            .expect("balance missing");
        assert_eq!(balance.text().collect::<String>().trim(), "$8,243.54");

        let values = html
            .select(&Selector::parse("dd").unwrap())
            .map(|dd| dd.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(values, ["$5,200.00", "$1,756.32"]);
    }

    #[tokio::test]
    async fn charts_are_described_for_screen_readers() {
        let response = get_dashboard_page(State(get_state())).await;
        let html = parse_html_document(response).await;

        let described = html
            .select(&Selector::parse("#charts [role='img'][aria-label]").unwrap())
            .count();
        assert_eq!(described, 2);
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{}", chart_id)).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Chart with id '{}' not found",
            chart_id
        );
    }
}
