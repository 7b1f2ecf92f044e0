//! Defines the endpoint for creating a new trip.
use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
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
    trip::{core::create_trip, form::TripForm},
};

/// The state needed to create a trip.
#[derive(Debug, Clone)]
pub struct CreateTripState {
    /// The database connection for managing trips.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTripState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new trip, redirects to the trip list on success.
pub async fn create_trip_endpoint(
    State(state): State<CreateTripState>,
    Extension(user_id): Extension<UserID>,
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

    if let Err(error) = create_trip(trip, user_id, &connection) {
        tracing::error!("could not create trip: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRIPS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        auth::{Email, PasswordHash, UserID, create_user},
        db::initialize,
        endpoints,
        test_utils::{alert_text, assert_hx_redirect, parse_html_fragment},
        trip::{form::TripForm, get_trips},
    };

    use super::{CreateTripState, create_trip_endpoint};

    fn get_test_state() -> (CreateTripState, UserID) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let user = create_user(
            Email::new_unchecked("driver@example.com"),
            PasswordHash::new_unchecked("hunter2"),
            &conn,
        )
        .unwrap();

        (
            CreateTripState {
                db_connection: Arc::new(Mutex::new(conn)),
            },
            user.id,
        )
    }

    fn valid_form() -> TripForm {
        TripForm {
            date: "2025-01-15".to_owned(),
            trip_id: "BLR-MYS-042".to_owned(),
            vehicle: "KA-01-1234".to_owned(),
            driver_name: "Ravi".to_owned(),
            revenue: "1500".to_owned(),
            fuel: "300".to_owned(),
            driver_fee: "200".to_owned(),
            handling_fee: "50".to_owned(),
            tolls: "40".to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn can_create_trip() {
        let (state, user_id) = get_test_state();

        let response = create_trip_endpoint(
            State(state.clone()),
            Extension(user_id),
            Form(valid_form()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRIPS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        let trips = get_trips(user_id, &connection).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].user_id, user_id);
        assert_eq!(trips[0].date, date!(2025 - 01 - 15));
        assert_eq!(trips[0].total_expenses(), 590.0);
    }

    #[tokio::test]
    async fn invalid_trip_responds_with_alert_and_writes_nothing() {
        let (state, user_id) = get_test_state();
        let form = TripForm {
            fuel: "".to_owned(),
            ..valid_form()
        };

        let response =
            create_trip_endpoint(State(state.clone()), Extension(user_id), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_eq!(
            alert_text(&html),
            ["Invalid trip details", "Fuel cost is required"]
        );
        let connection = state.db_connection.lock().unwrap();
        assert!(get_trips(user_id, &connection).unwrap().is_empty());
    }
}
