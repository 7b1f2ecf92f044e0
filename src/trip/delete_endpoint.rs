use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    alert::Alert,
    auth::UserID,
    trip::{TripId, core::delete_trip},
};

/// The state needed to delete a trip.
#[derive(Debug, Clone)]
pub struct DeleteTripState {
    /// The database connection for managing trips.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTripState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a trip, responds with an alert.
///
/// On success the client is told to reload the page so the list is fetched
/// again from the database.
pub async fn delete_trip_endpoint(
    State(state): State<DeleteTripState>,
    Extension(user_id): Extension<UserID>,
    Path(trip_id): Path<TripId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_trip(trip_id, user_id, &connection) {
        Ok(0) => Error::DeleteMissingTrip.into_alert_response(),
        Ok(_) => (
            [("HX-Refresh", "true")],
            Alert::SuccessSimple {
                message: "Trip deleted successfully".to_owned(),
            },
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not delete trip {trip_id}: {error}");
            error.into_alert_response()
        }
    }
}
