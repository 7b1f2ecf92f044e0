//! The expense categories shown on the dashboard.

use serde::Deserialize;

/// One of the six expense columns of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Fuel,
    DriverFee,
    Handling,
    Tolls,
    PettyCash,
    Other,
}

impl ExpenseCategory {
    /// Every category in the order the dashboard shows them.
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Fuel,
        Self::DriverFee,
        Self::Handling,
        Self::Tolls,
        Self::PettyCash,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fuel => "Fuel",
            Self::DriverFee => "Driver Fees",
            Self::Handling => "Handling",
            Self::Tolls => "Tolls",
            Self::PettyCash => "Petty Cash",
            Self::Other => "Other",
        }
    }

    /// The value used for this category in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::DriverFee => "driver_fee",
            Self::Handling => "handling",
            Self::Tolls => "tolls",
            Self::PettyCash => "petty_cash",
            Self::Other => "other",
        }
    }

    /// The column in the trip table that holds this category's amounts.
    pub(super) fn column(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::DriverFee => "driver_fee",
            Self::Handling => "handling_fee",
            Self::Tolls => "tolls",
            Self::PettyCash => "petty_cash",
            Self::Other => "other_expenses",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::ExpenseCategory;

    #[derive(Deserialize)]
    struct Query {
        category: ExpenseCategory,
    }

    #[test]
    fn query_values_round_trip_through_serde() {
        for category in ExpenseCategory::ALL {
            let query: Query =
                serde_urlencoded::from_str(&format!("category={}", category.as_query_value()))
                    .unwrap();

            assert_eq!(query.category, category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_urlencoded::from_str::<Query>("category=insurance").is_err());
    }
}
