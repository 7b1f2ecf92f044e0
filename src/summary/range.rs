//! The date range picked on the dashboard.

use std::ops::RangeInclusive;

use serde::Deserialize;
use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The `from` and `to` query parameters of the dashboard.
///
/// Blank or malformed dates fall back to the bounds of the current month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl DateRangeQuery {
    /// The inclusive range to summarise, given the local date `today`.
    ///
    /// Reversed bounds are swapped.
    pub fn resolve(&self, today: Date) -> RangeInclusive<Date> {
        let current_month = current_month(today);
        let from = parse_date(&self.from).unwrap_or(*current_month.start());
        let to = parse_date(&self.to).unwrap_or(*current_month.end());

        if from <= to { from..=to } else { to..=from }
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    Date::parse(raw, DATE_FORMAT)
        .inspect_err(|error| tracing::debug!("Ignoring malformed date {raw:?}: {error}"))
        .ok()
}

/// The first and last day of the month `today` falls in.
pub(super) fn current_month(today: Date) -> RangeInclusive<Date> {
    let first = today - Duration::days(i64::from(today.day()) - 1);
    // 32 days after the first always lands early in the next month.
    let next_month = first + Duration::days(32);
    let last = next_month - Duration::days(i64::from(next_month.day()));

    first..=last
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{DateRangeQuery, current_month};

    fn query(from: &str, to: &str) -> DateRangeQuery {
        DateRangeQuery {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    #[test]
    fn current_month_bounds() {
        assert_eq!(
            current_month(date!(2025 - 01 - 15)),
            date!(2025 - 01 - 01)..=date!(2025 - 01 - 31)
        );
        assert_eq!(
            current_month(date!(2024 - 02 - 29)),
            date!(2024 - 02 - 01)..=date!(2024 - 02 - 29)
        );
        assert_eq!(
            current_month(date!(2025 - 02 - 01)),
            date!(2025 - 02 - 01)..=date!(2025 - 02 - 28)
        );
        assert_eq!(
            current_month(date!(2025 - 12 - 31)),
            date!(2025 - 12 - 01)..=date!(2025 - 12 - 31)
        );
        assert_eq!(
            current_month(date!(2025 - 04 - 30)),
            date!(2025 - 04 - 01)..=date!(2025 - 04 - 30)
        );
    }

    #[test]
    fn missing_bounds_default_to_current_month() {
        let range = DateRangeQuery::default().resolve(date!(2025 - 03 - 10));

        assert_eq!(range, date!(2025 - 03 - 01)..=date!(2025 - 03 - 31));
    }

    #[test]
    fn uses_given_bounds() {
        let range = query("2025-01-01", "2025-01-31").resolve(date!(2025 - 06 - 10));

        assert_eq!(range, date!(2025 - 01 - 01)..=date!(2025 - 01 - 31));
    }

    #[test]
    fn swaps_reversed_bounds() {
        let range = query("2025-02-10", "2025-01-05").resolve(date!(2025 - 06 - 10));

        assert_eq!(range, date!(2025 - 01 - 05)..=date!(2025 - 02 - 10));
    }

    #[test]
    fn malformed_bound_falls_back() {
        let range = query("yesterday", "2025-06-20").resolve(date!(2025 - 06 - 10));

        assert_eq!(range, date!(2025 - 06 - 01)..=date!(2025 - 06 - 20));
    }
}
