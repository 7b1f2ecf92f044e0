//! Which figures the dashboard computes and shows.

use clap::ValueEnum;

/// The figures shown by the dashboard summary.
///
/// Expense categories and total expenses are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMetrics {
    /// Show total revenue and net profit.
    pub revenue: bool,
    /// Allow opening the per-vehicle breakdown of an expense category.
    pub drill_down: bool,
}

impl SummaryMetrics {
    /// Revenue, net profit and the per-vehicle drill-down.
    pub const FULL: Self = Self {
        revenue: true,
        drill_down: true,
    };

    /// Only the expense categories and total expenses.
    pub const EXPENSES_ONLY: Self = Self {
        revenue: false,
        drill_down: false,
    };
}

/// The `--summary-mode` command line option.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryMode {
    /// Revenue, expenses, net profit and the per-vehicle drill-down.
    #[default]
    Full,
    /// Expenses only.
    ExpensesOnly,
}

impl From<SummaryMode> for SummaryMetrics {
    fn from(mode: SummaryMode) -> Self {
        match mode {
            SummaryMode::Full => SummaryMetrics::FULL,
            SummaryMode::ExpensesOnly => SummaryMetrics::EXPENSES_ONLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::{SummaryMetrics, SummaryMode};

    #[test]
    fn parses_command_line_values() {
        assert_eq!(
            SummaryMode::from_str("full", false),
            Ok(SummaryMode::Full)
        );
        assert_eq!(
            SummaryMode::from_str("expenses-only", false),
            Ok(SummaryMode::ExpensesOnly)
        );
    }

    #[test]
    fn modes_map_to_metrics() {
        assert_eq!(
            SummaryMetrics::from(SummaryMode::Full),
            SummaryMetrics::FULL
        );
        assert_eq!(
            SummaryMetrics::from(SummaryMode::ExpensesOnly),
            SummaryMetrics::EXPENSES_ONLY
        );
    }
}
