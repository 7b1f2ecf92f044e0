//! Downloads the (filtered) trip list as a CSV file.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use csv::Writer;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    auth::UserID,
    timezone::get_local_date,
    trip::{Trip, core::get_trips, filter::filter_trips, list_page::SearchQuery},
};

const CSV_HEADER: [&str; 14] = [
    "Date",
    "Trip ID",
    "Vehicle",
    "Driver",
    "Revenue",
    "Fuel",
    "Driver Fee",
    "Handling",
    "Tolls",
    "Petty Cash",
    "Other",
    "Total Expenses",
    "Profit",
    "Notes",
];

/// The state needed to export trips.
#[derive(Debug, Clone)]
pub struct ExportTripsState {
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for ExportTripsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn trip_record(trip: &Trip) -> [String; 14] {
    [
        trip.date.to_string(),
        trip.trip_id.clone(),
        trip.vehicle.clone(),
        trip.driver_name.clone(),
        trip.revenue.to_string(),
        trip.fuel.to_string(),
        trip.driver_fee.to_string(),
        trip.handling_fee.to_string(),
        trip.tolls.to_string(),
        trip.petty_cash.to_string(),
        trip.other_expenses.to_string(),
        trip.total_expenses().to_string(),
        trip.profit().to_string(),
        trip.notes.clone().unwrap_or_default(),
    ]
}

/// Write `trips` as CSV text with a header row.
///
/// # Errors
/// Returns [Error::CsvError] if a record cannot be written.
pub fn trips_to_csv(trips: &[Trip]) -> Result<String, Error> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|error| Error::CsvError(error.to_string()))?;

    for trip in trips {
        writer
            .write_record(trip_record(trip))
            .map_err(|error| Error::CsvError(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}

/// Respond with the current user's trips that match the search term as a CSV
/// attachment named after today's date.
pub async fn export_trips(
    State(state): State<ExportTripsState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let today = get_local_date(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let trips = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_trips(user_id, &connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve trips for export: {error}"))?
    };

    let csv = trips_to_csv(&filter_trips(trips, &query.search))
        .inspect_err(|error| tracing::error!("Could not export trips: {error}"))?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"trips_{today}.csv\""),
            ),
        ],
        csv,
    )
        .into_response())
}
