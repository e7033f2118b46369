//! Defines the route handler for the page that searches and filters transactions.
use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;

use crate::AppState;

use super::{
    core::Transaction,
    filter::TransactionFilter,
    view::{transaction_results_view, transactions_view},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The snapshot of transactions loaded when the server started.
    pub transactions: Arc<[Transaction]>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
        }
    }
}

/// Render the transactions that match the search text and category in the
/// query string.
///
/// Requests made by htmx only get the results table so the filter form keeps
/// its focus while the user types.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(filter): Query<TransactionFilter>,
) -> Response {
    let matching = filter.apply(&state.transactions);

    tracing::debug!(
        "{} of {} transactions match {filter:?}",
        matching.len(),
        state.transactions.len()
    );

    if is_htmx_request {
        transaction_results_view(&matching, &filter).into_response()
    } else {
        transactions_view(&matching, &filter).into_response()
    }
}
