//! Transactions: the snapshot loaded at start-up, filtering, and the page that displays them.

mod core;
mod filter;
mod source;
mod transactions_page;
mod view;

pub use self::core::{Category, Transaction};
pub use filter::{CategoryFilter, filter_transactions};
pub use source::{JsonFileTransactions, SampleTransactions, TransactionSource, ensure_unique_ids};
pub use transactions_page::get_transactions_page;
