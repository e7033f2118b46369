//! The budgeting page and the endpoints for previewing, saving and resetting budgets.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    budget::{
        core::{BudgetFormData, BudgetTracking, Budgets},
        view::{budget_panel_view, budgeting_view},
    },
    html::format_currency,
};

/// The state needed for the budgeting page and endpoints.
#[derive(Debug, Clone)]
pub struct BudgetState {
    pub budgets: Arc<Mutex<Budgets>>,
    pub tracking: BudgetTracking,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budgets: state.budgets.clone(),
            tracking: state.budget_tracking,
        }
    }
}

/// Display the saved budgets and how much of them has been spent.
pub async fn get_budgeting_page(State(state): State<BudgetState>) -> Response {
    let budgets = match state.budgets.lock() {
        Ok(budgets) => *budgets,
        Err(error) => {
            tracing::error!("could not acquire budgets lock: {error}");
            return Error::StateLockError.into_response();
        }
    };

    let form = BudgetFormData::from_budgets(&budgets);

    budgeting_view(panel(&form, &state.tracking)).into_response()
}

/// Validate a draft of the budget form without saving it.
///
/// Returns the budget panel with inline errors and the tracking card
/// recomputed from the draft.
pub async fn preview_budgets(
    State(state): State<BudgetState>,
    Form(form): Form<BudgetFormData>,
) -> Response {
    panel(&form, &state.tracking).into_response()
}

/// Save the budgets if both are valid.
///
/// Invalid input leaves the saved budgets untouched and returns the form with
/// inline errors.
pub async fn save_budgets(
    State(state): State<BudgetState>,
    Form(form): Form<BudgetFormData>,
) -> Response {
    let Some(budgets) = form.parse().budgets() else {
        tracing::debug!("rejected budget form {form:?}");
        return panel(&form, &state.tracking).into_response();
    };

    if let Err(error) = store_budgets(&state, budgets) {
        return error.into_alert_response();
    }

    tracing::info!(
        "saved budgets: daily {}, monthly {}",
        budgets.daily.get(),
        budgets.monthly.get()
    );

    let alert = Alert::SuccessSimple {
        message: "Budgets saved".to_owned(),
    };

    with_alert(panel(&form, &state.tracking), alert).into_response()
}

/// Restore the default budgets.
pub async fn reset_budgets(State(state): State<BudgetState>) -> Response {
    let budgets = Budgets::default();

    if let Err(error) = store_budgets(&state, budgets) {
        return error.into_alert_response();
    }

    let form = BudgetFormData::from_budgets(&budgets);
    let alert = Alert::Success {
        message: "Budgets reset to defaults".to_owned(),
        details: format!(
            "Daily {}, monthly {}.",
            format_currency(budgets.daily.get()),
            format_currency(budgets.monthly.get())
        ),
    };

    with_alert(panel(&form, &state.tracking), alert).into_response()
}

fn store_budgets(state: &BudgetState, budgets: Budgets) -> Result<(), Error> {
    let mut saved = state.budgets.lock().map_err(|error| {
        tracing::error!("could not acquire budgets lock: {error}");
        Error::StateLockError
    })?;

    *saved = budgets;

    Ok(())
}

fn panel(form: &BudgetFormData, tracking: &BudgetTracking) -> Markup {
    let draft = form.parse();
    let progress = tracking.progress(&draft);

    budget_panel_view(form, &draft, &progress)
}

fn with_alert(fragment: Markup, alert: Alert) -> Markup {
    html!(
        (fragment)
        (alert.into_oob_html())
    )
}

#[cfg(test)]
mod budgeting_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use scraper::Selector;

    use crate::{
        budget::{
            core::{BudgetAmount, BudgetTracking, Budgets},
            page::{BudgetState, get_budgeting_page},
        },
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    fn get_state(budgets: Budgets) -> BudgetState {
        BudgetState {
            budgets: Arc::new(Mutex::new(budgets)),
            tracking: BudgetTracking::sample(),
        }
    }

    #[tokio::test]
    async fn renders_form_with_default_budgets() {
        let response = get_budgeting_page(State(get_state(Budgets::default()))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::BUDGETS_API, "hx-post");
        assert_form_input_with_value(&form, "daily", "text", "75");
        assert_form_input_with_value(&form, "monthly", "text", "2000");
        assert_form_submit_button_with_text(&form, "Save Budgets");
    }

    #[tokio::test]
    async fn renders_saved_budgets() {
        let budgets = Budgets {
            daily: BudgetAmount::new_unchecked(40.0),
            monthly: BudgetAmount::new_unchecked(1500.5),
        };

        let response = get_budgeting_page(State(get_state(budgets))).await;

        let html = parse_html_document(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "daily", "text", "40");
        assert_form_input_with_value(&form, "monthly", "text", "1500.5");
    }

    #[tokio::test]
    async fn shows_tracking_progress_bars() {
        let response = get_budgeting_page(State(get_state(Budgets::default()))).await;
        let html = parse_html_document(response).await;

        let bars = html
            .select(&Selector::parse("[role='progressbar']").unwrap())
            .map(|bar| {
                (
                    bar.value().attr("aria-valuenow").unwrap_or_default().to_owned(),
                    bar.value().attr("aria-label").unwrap_or_default().to_owned(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(
            bars,
            [
                (
                    "83".to_owned(),
                    "Today: $62.00 / $75.00 progress".to_owned()
                ),
                (
                    "72".to_owned(),
                    "This Month: $1,430.00 / $2,000.00 progress".to_owned()
                ),
            ]
        );

        let warning_bars = html
            .select(&Selector::parse("[role='progressbar'] > .bg-amber-500").unwrap())
            .count();
        assert_eq!(warning_bars, 2);
    }

    #[tokio::test]
    async fn page_has_no_validation_errors() {
        let response = get_budgeting_page(State(get_state(Budgets::default()))).await;
        let html = parse_html_document(response).await;

        let invalid = html
            .select(&Selector::parse("input[aria-invalid='true']").unwrap())
            .count();
        assert_eq!(invalid, 0);
    }
}
