//! Where the transaction snapshot comes from when the server starts.

use std::{collections::HashSet, fs, path::PathBuf};

use time::macros::date;

use crate::Error;

use super::core::{Category, Transaction};

/// Supplies the read-only list of transactions shown by the app.
pub trait TransactionSource {
    /// Load the transactions in display order.
    ///
    /// # Errors
    /// Returns an [Error::TransactionSource] if the transactions cannot be read.
    fn load(&self) -> Result<Vec<Transaction>, Error>;
}

/// The built-in demo transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleTransactions;

impl TransactionSource for SampleTransactions {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(sample_transactions())
    }
}

/// The five demo transactions, newest first.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            "t1",
            date!(2025 - 10 - 20),
            "Grocery Mart",
            Category::Groceries,
            -82.35,
        ),
        Transaction::new(
            "t2",
            date!(2025 - 10 - 20),
            "City Transit",
            Category::Transport,
            -2.75,
        ),
        Transaction::new(
            "t3",
            date!(2025 - 10 - 19),
            "Acme Corp",
            Category::Salary,
            1800.00,
        ),
        Transaction::new(
            "t4",
            date!(2025 - 10 - 18),
            "Coffee House",
            Category::Dining,
            -6.25,
        ),
        Transaction::new(
            "t5",
            date!(2025 - 10 - 17),
            "Streaming Co",
            Category::Subscriptions,
            -12.99,
        ),
    ]
}

/// Transactions read from a JSON file containing an array of transactions.
#[derive(Debug, Clone)]
pub struct JsonFileTransactions {
    path: PathBuf,
}

impl JsonFileTransactions {
    /// Read transactions from the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for JsonFileTransactions {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let text = fs::read_to_string(&self.path).map_err(|error| {
            Error::TransactionSource(format!("could not read {}: {error}", self.path.display()))
        })?;

        serde_json::from_str(&text).map_err(|error| {
            Error::TransactionSource(format!("could not parse {}: {error}", self.path.display()))
        })
    }
}

/// Check that no two transactions share an ID.
///
/// # Errors
/// Returns an [Error::DuplicateTransactionId] naming the first repeated ID.
pub fn ensure_unique_ids(transactions: &[Transaction]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(transactions.len());

    for transaction in transactions {
        if !seen.insert(transaction.id.as_str()) {
            return Err(Error::DuplicateTransactionId(transaction.id.clone()));
        }
    }

    Ok(())
}
