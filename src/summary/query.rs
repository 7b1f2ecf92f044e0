//! Database queries for the dashboard.
//!
//! Both queries are scoped to one owner and an inclusive date range. Neither
//! sums anything in SQL, the totals are computed in [super::aggregation].

use std::ops::RangeInclusive;

use rusqlite::{Connection, params};
use time::Date;

use crate::{
    Error,
    auth::UserID,
    summary::category::ExpenseCategory,
    trip::{TRIP_COLUMNS, Trip, map_trip_row},
};

/// The amount one trip spent in a single expense category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct VehicleAmount {
    pub vehicle: String,
    pub amount: f64,
}

/// Gets the trips owned by `user_id` dated within `date_range`, both ends
/// included.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub(super) fn get_trips_in_date_range(
    date_range: &RangeInclusive<Date>,
    user_id: UserID,
    connection: &Connection,
) -> Result<Vec<Trip>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRIP_COLUMNS} FROM trip
            WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
            ORDER BY date DESC, id DESC"
        ))?
        .query_map(
            params![user_id, date_range.start(), date_range.end()],
            map_trip_row,
        )?
        .collect::<Result<Vec<Trip>, rusqlite::Error>>()
        .map_err(Error::from)
}

/// Gets only the vehicle and the `category` amount of the trips owned by
/// `user_id` dated within `date_range`, both ends included.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub(super) fn get_category_amounts(
    category: ExpenseCategory,
    date_range: &RangeInclusive<Date>,
    user_id: UserID,
    connection: &Connection,
) -> Result<Vec<VehicleAmount>, Error> {
    connection
        .prepare(&format!(
            "SELECT vehicle, {} FROM trip WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3",
            category.column()
        ))?
        .query_map(
            params![user_id, date_range.start(), date_range.end()],
            |row| {
                Ok(VehicleAmount {
                    vehicle: row.get(0)?,
                    amount: row.get(1)?,
                })
            },
        )?
        .collect::<Result<Vec<VehicleAmount>, rusqlite::Error>>()
        .map_err(Error::from)
}
