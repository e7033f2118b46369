//! Budget amounts, validation, and progress against the amount spent.

use serde::{Deserialize, Serialize};

use crate::{Error, html::format_currency};

/// The daily budget a fresh server starts with.
pub const DEFAULT_DAILY_BUDGET: f64 = 75.0;
/// The monthly budget a fresh server starts with.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 2000.0;

/// A budget that is guaranteed to be a finite number greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetAmount(f64);

impl BudgetAmount {
    /// Parse a budget from user input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [Error::InvalidBudgetAmount] if `text` is empty, is not a
    /// number, or is not greater than zero.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidBudgetAmount(text.to_owned());

        let amount: f64 = text.trim().parse().map_err(|_| invalid())?;

        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(invalid())
        }
    }

    /// Create a budget without validation.
    ///
    /// The caller should ensure that `amount` is finite and greater than zero.
    pub const fn new_unchecked(amount: f64) -> Self {
        Self(amount)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// The budgets the user has saved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budgets {
    pub daily: BudgetAmount,
    pub monthly: BudgetAmount,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            daily: BudgetAmount::new_unchecked(DEFAULT_DAILY_BUDGET),
            monthly: BudgetAmount::new_unchecked(DEFAULT_MONTHLY_BUDGET),
        }
    }
}

/// The raw budget form, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetFormData {
    #[serde(default)]
    pub daily: String,
    #[serde(default)]
    pub monthly: String,
}

impl BudgetFormData {
    /// Fill the form with the saved `budgets`.
    pub fn from_budgets(budgets: &Budgets) -> Self {
        Self {
            daily: budgets.daily.get().to_string(),
            monthly: budgets.monthly.get().to_string(),
        }
    }

    /// Validate both fields independently.
    pub fn parse(&self) -> BudgetDraft {
        BudgetDraft {
            daily: BudgetAmount::parse(&self.daily),
            monthly: BudgetAmount::parse(&self.monthly),
        }
    }
}

/// The outcome of validating each field of a [BudgetFormData].
#[derive(Debug, PartialEq)]
pub struct BudgetDraft {
    pub daily: Result<BudgetAmount, Error>,
    pub monthly: Result<BudgetAmount, Error>,
}

impl BudgetDraft {
    /// The budgets to save, if every field is valid.
    pub fn budgets(&self) -> Option<Budgets> {
        match (&self.daily, &self.monthly) {
            (Ok(daily), Ok(monthly)) => Some(Budgets {
                daily: *daily,
                monthly: *monthly,
            }),
            _ => None,
        }
    }
}

/// How close spending is to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Less than 70% of the budget has been spent.
    OnTrack,
    /// At least 70% of the budget has been spent.
    Warning,
    /// At least 90% of the budget has been spent.
    Danger,
}

impl BudgetStatus {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 90 {
            BudgetStatus::Danger
        } else if percent >= 70 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }

    /// The colour of the progress bar.
    pub fn bar_style(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "bg-emerald-500",
            BudgetStatus::Warning => "bg-amber-500",
            BudgetStatus::Danger => "bg-rose-500",
        }
    }
}

/// Spending measured against one budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    /// E.g. "Today: $62.00 / $75.00".
    pub label: String,
    /// Whole percent of the budget spent, capped at 100.
    pub percent: u8,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    /// Compare `spent` with `budget`.
    ///
    /// An invalid budget is treated as $1 for the percentage and displayed as $0.00.
    pub fn new(period: &str, spent: f64, budget: Option<BudgetAmount>) -> Self {
        let max = budget.map_or(1.0, |budget| budget.get());
        let percent = (spent * 100.0 / max).round().clamp(0.0, 100.0) as u8;

        let label = format!(
            "{period}: {} / {}",
            format_currency(spent),
            format_currency(budget.map_or(0.0, |budget| budget.get()))
        );

        Self {
            label,
            percent,
            status: BudgetStatus::from_percent(percent),
        }
    }
}

/// The amounts spent in the current day and month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTracking {
    pub spent_today: f64,
    pub spent_this_month: f64,
}

impl BudgetTracking {
    /// The demo figures.
    pub fn sample() -> Self {
        Self {
            spent_today: 62.0,
            spent_this_month: 1430.0,
        }
    }

    /// Progress for the daily and monthly budgets, in that order.
    pub fn progress(&self, draft: &BudgetDraft) -> [BudgetProgress; 2] {
        [
            BudgetProgress::new("Today", self.spent_today, draft.daily.as_ref().ok().copied()),
            BudgetProgress::new(
                "This Month",
                self.spent_this_month,
                draft.monthly.as_ref().ok().copied(),
            ),
        ]
    }
}

impl Default for BudgetTracking {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod budget_amount_tests {
    use crate::{Error, budget::core::BudgetAmount};

    #[test]
    fn parses_positive_numbers() {
        assert_eq!(BudgetAmount::parse("75"), Ok(BudgetAmount::new_unchecked(75.0)));
        assert_eq!(
            BudgetAmount::parse("12.50"),
            Ok(BudgetAmount::new_unchecked(12.5))
        );
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(
            BudgetAmount::parse("  100 "),
            Ok(BudgetAmount::new_unchecked(100.0))
        );
    }

    #[test]
    fn rejects_empty_and_non_numeric_input() {
        for text in ["", "   ", "abc", "12abc", "$5"] {
            assert_eq!(
                BudgetAmount::parse(text),
                Err(Error::InvalidBudgetAmount(text.to_owned())),
                "want error for {text:?}"
            );
        }
    }

    #[test]
    fn rejects_zero_and_negative_numbers() {
        for text in ["0", "-0", "-5"] {
            assert!(BudgetAmount::parse(text).is_err(), "want error for {text:?}");
        }
    }

    #[test]
    fn rejects_non_finite_numbers() {
        for text in ["inf", "NaN", "infinity"] {
            assert!(BudgetAmount::parse(text).is_err(), "want error for {text:?}");
        }
    }
}
