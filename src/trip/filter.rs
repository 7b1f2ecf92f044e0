//! The search box filter for the trip list and CSV export.

use crate::trip::Trip;

/// Whether `trip` matches the search term `search`.
///
/// The trip ID, vehicle and driver name are matched ignoring case, and the
/// date is matched against its `YYYY-MM-DD` text. The term is used as typed,
/// so surrounding spaces must match too. An empty term matches every trip.
pub fn matches_search(trip: &Trip, search: &str) -> bool {
    let search = search.to_lowercase();

    if search.is_empty() {
        return true;
    }

    [&trip.trip_id, &trip.vehicle, &trip.driver_name]
        .iter()
        .any(|field| field.to_lowercase().contains(&search))
        || trip.date.to_string().contains(&search)
}

/// Keep the trips that match `search`, preserving their order.
pub fn filter_trips(trips: Vec<Trip>, search: &str) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|trip| matches_search(trip, search))
        .collect()
}
