//! Core transaction domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The spending categories the app knows how to present.
///
/// Any other category name is kept as [Category::Other] so that data from
/// an external source still renders, just without a dedicated colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Food and household shopping.
    Groceries,
    /// Public transport, fuel and fares.
    Transport,
    /// Wages and other employment income.
    Salary,
    /// Cafes and restaurants.
    Dining,
    /// Recurring services.
    Subscriptions,
    /// Any category name without a dedicated badge colour.
    Other(String),
}

impl Category {
    /// The known categories, in the order they are offered as filters.
    pub const KNOWN: [Category; 5] = [
        Category::Groceries,
        Category::Transport,
        Category::Salary,
        Category::Dining,
        Category::Subscriptions,
    ];

    /// The display name, which is also the value used in filter URLs.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Groceries => "Groceries",
            Category::Transport => "Transport",
            Category::Salary => "Salary",
            Category::Dining => "Dining",
            Category::Subscriptions => "Subscriptions",
            Category::Other(name) => name,
        }
    }

    /// The Tailwind classes for this category's badge.
    pub fn badge_style(&self) -> &'static str {
        match self {
            Category::Groceries => "bg-emerald-100 text-emerald-800",
            Category::Transport => "bg-blue-100 text-blue-800",
            Category::Salary => "bg-violet-100 text-violet-800",
            Category::Dining => "bg-rose-100 text-rose-800",
            Category::Subscriptions => "bg-amber-100 text-amber-800",
            Category::Other(_) => "bg-gray-100 text-gray-800",
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "Groceries" => Category::Groceries,
            "Transport" => Category::Transport,
            "Salary" => Category::Salary,
            "Dining" => Category::Dining,
            "Subscriptions" => Category::Subscriptions,
            other => Category::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single financial event: money spent (negative `amount`) or received
/// (zero or positive `amount`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifies the transaction within a snapshot.
    pub id: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Who the money was paid to or received from.
    pub merchant: String,
    /// What kind of spending or income this is.
    pub category: Category,
    /// The amount in dollars, negative for expenses.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(id: &str, date: Date, merchant: &str, category: Category, amount: f64) -> Self {
        Self {
            id: id.to_owned(),
            date,
            merchant: merchant.to_owned(),
            category,
            amount,
        }
    }

    /// Whether the transaction is money spent rather than received.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}


#[cfg(test)]
mod transaction_serde_tests {
    use time::macros::date;

    use super::{Category, Transaction};

    #[test]
    fn deserializes_iso_date_and_category() {
        let json = r#"{
            "id": "t1",
            "date": "2025-10-20",
            "merchant": "Grocery Mart",
            "category": "Groceries",
            "amount": -82.35
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            transaction,
            Transaction::new(
                "t1",
                date!(2025 - 10 - 20),
                "Grocery Mart",
                Category::Groceries,
                -82.35
            )
        );
        assert!(transaction.is_expense());
    }

    #[test]
    fn serializes_date_as_iso_string() {
        let transaction = Transaction::new(
            "t3",
            date!(2025 - 10 - 19),
            "Acme Corp",
            Category::Salary,
            1800.0,
        );

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["date"], "2025-10-19");
        assert_eq!(json["category"], "Salary");
    }

    #[test]
    fn zero_amount_is_not_an_expense() {
        let transaction = Transaction::new(
            "t0",
            date!(2025 - 10 - 19),
            "Refund",
            Category::Other("Refunds".to_owned()),
            0.0,
        );

        assert!(!transaction.is_expense());
    }
}
