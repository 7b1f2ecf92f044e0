//! Defines the endpoint for updating a trip.
use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    auth::UserID,
    endpoints,
    trip::{TripId, core::update_trip, form::TripForm},
};

/// The state needed to edit a trip.
#[derive(Debug, Clone)]
pub struct EditTripState {
    /// The database connection for managing trips.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditTripState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for updating a trip, redirects to the trip list on success.
pub async fn edit_trip_endpoint(
    State(state): State<EditTripState>,
    Extension(user_id): Extension<UserID>,
    Path(trip_id): Path<TripId>,
    Form(form): Form<TripForm>,
) -> Response {
    let trip = match form.validate() {
        Ok(trip) => trip,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match update_trip(trip_id, user_id, &trip, &connection) {
        Ok(0) => {
            tracing::error!("Could not update trip {trip_id}: update returned zero rows affected");
            Error::UpdateMissingTrip.into_alert_response()
        }
        Ok(_) => (
            HxRedirect(endpoints::TRIPS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not update trip {trip_id}: {error}");
            error.into_alert_response()
        }
    }
}
