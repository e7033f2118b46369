//! The figures shown on the dashboard.

/// Totals shown on the balance card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSummary {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
}

/// Money spent on one day of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySpend {
    /// Short day label, e.g. "M" for Monday.
    pub label: &'static str,
    pub amount: f64,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub summary: AccountSummary,
    /// Spending for each of the last seven days, oldest first.
    pub daily_spending: Vec<DailySpend>,
    /// The upper bound of the daily spending chart's y-axis.
    pub daily_spending_max: f64,
    /// Running total of spending over the week.
    pub weekly_progress: Vec<f64>,
    /// The upper bound of the weekly progress chart's y-axis.
    pub weekly_progress_max: f64,
}

impl DashboardSnapshot {
    /// The demo figures.
    pub fn sample() -> Self {
        let daily_spending = [
            ("M", 45.0),
            ("T", 72.0),
            ("W", 36.0),
            ("T", 120.0),
            ("F", 88.0),
            ("S", 160.0),
            ("S", 98.0),
        ]
        .into_iter()
        .map(|(label, amount)| DailySpend { label, amount })
        .collect();

        Self {
            summary: AccountSummary {
                balance: 8243.54,
                income: 5200.0,
                expenses: 1756.32,
            },
            daily_spending,
            daily_spending_max: 200.0,
            weekly_progress: vec![200.0, 350.0, 500.0, 780.0, 910.0, 980.0, 1000.0],
            weekly_progress_max: 1000.0,
        }
    }
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::DashboardSnapshot;

    #[test]
    fn sample_covers_a_week() {
        let snapshot = DashboardSnapshot::sample();

        assert_eq!(snapshot.daily_spending.len(), 7);
        assert_eq!(snapshot.weekly_progress.len(), 7);
    }

    #[test]
    fn sample_fits_chart_bounds() {
        let snapshot = DashboardSnapshot::sample();

        assert!(
            snapshot
                .daily_spending
                .iter()
                .all(|day| day.amount <= snapshot.daily_spending_max)
        );
        assert!(
            snapshot
                .weekly_progress
                .iter()
                .all(|&value| value <= snapshot.weekly_progress_max)
        );
    }
}
