//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    budget::{BudgetTracking, Budgets},
    dashboard::DashboardSnapshot,
    settings::TwoFactorSettings,
    transaction::{Transaction, TransactionSource, ensure_unique_ids},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions loaded at start-up. They never change while the server runs.
    pub transactions: Arc<[Transaction]>,

    /// The figures shown on the dashboard.
    pub dashboard: Arc<DashboardSnapshot>,

    /// The budgets the user has saved, kept in memory.
    pub budgets: Arc<Mutex<Budgets>>,

    /// The amounts spent today and this month.
    pub budget_tracking: BudgetTracking,

    /// The two-factor authentication set-up state, kept in memory.
    pub two_factor: Arc<Mutex<TwoFactorSettings>>,
}

impl AppState {
    /// Create a new [AppState] from the transactions in `source`.
    ///
    /// # Errors
    /// Returns an error if the transactions cannot be loaded or if two of
    /// them share an ID.
    pub fn new(source: &impl TransactionSource) -> Result<Self, Error> {
        let transactions = source.load()?;
        ensure_unique_ids(&transactions)?;

        tracing::info!("loaded {} transactions", transactions.len());

        Ok(Self {
            transactions: transactions.into(),
            dashboard: Arc::new(DashboardSnapshot::sample()),
            budgets: Arc::new(Mutex::new(Budgets::default())),
            budget_tracking: BudgetTracking::sample(),
            two_factor: Arc::new(Mutex::new(TwoFactorSettings::default())),
        })
    }

    /// Create an [AppState] with the built-in sample transactions.
    #[cfg(test)]
    pub fn sample() -> Self {
        Self::new(&crate::transaction::SampleTransactions)
            .expect("Could not load the sample transactions")
    }
}
