//! Search and category filtering over a transaction snapshot.

use serde::{Deserialize, Serialize};

use super::core::Transaction;

/// The category value that turns the category filter off.
///
/// A transaction whose category is literally named "All" cannot be singled
/// out by category; it is still found by the text search.
pub const ALL_CATEGORIES: &str = "All";

/// Restricts transactions to a single category, or lets every category through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only transactions whose category name is exactly this string.
    Only(String),
}

impl CategoryFilter {
    /// The value sent in the `category` query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    /// Whether `transaction` passes the filter.
    ///
    /// Category names are compared exactly, including case.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => transaction.category.as_str() == name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_owned())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from(value.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_owned()
    }
}

/// The user's search text and selected category, as sent in the query string
/// of the transactions page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Free text matched against the merchant, category and date.
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: CategoryFilter,
}

impl TransactionFilter {
    pub fn new(query: &str, category: CategoryFilter) -> Self {
        Self {
            q: query.to_owned(),
            category,
        }
    }

    /// Whether either the search text or the category narrows the results.
    pub fn is_active(&self) -> bool {
        !self.q.is_empty() || self.category != CategoryFilter::All
    }

    /// The URL for `route` with this filter encoded in the query string.
    pub fn to_url(&self, route: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) => format!("{route}?{query}"),
            Err(error) => {
                tracing::error!("Could not encode transaction filter {self:?}: {error}");
                route.to_owned()
            }
        }
    }

    /// Apply the filter to `transactions`, see [filter_transactions].
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        filter_transactions(transactions, &self.q, &self.category)
    }
}

/// Get the transactions that pass both the category filter and the text search,
/// in the order given.
///
/// The text search passes when `query` is a case-insensitive substring of the
/// merchant, the category name or the ISO date (`YYYY-MM-DD`). An empty query
/// matches everything.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Transaction> {
    let query = query.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| category.matches(transaction))
        .filter(|transaction| matches_query(transaction, &query))
        .collect()
}

/// `query` must already be lowercase.
fn matches_query(transaction: &Transaction, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    [
        transaction.merchant.to_lowercase(),
        transaction.category.as_str().to_lowercase(),
        transaction.date.to_string(),
    ]
    .iter()
    .any(|field| field.contains(query))
}
