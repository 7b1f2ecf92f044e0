//! Defines the route handler for the page for editing a trip.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    auth::UserID,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, loading_spinner, rupee_input_styles},
    navigation::NavBar,
    trip::{
        TripId,
        core::get_trip,
        form::{TripForm, trip_form_fields},
    },
};

fn edit_trip_view(trip_id: TripId, values: &TripForm) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRIPS_VIEW).into_html();
    let update_endpoint = format_endpoint(endpoints::TRIP, trip_id);
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Trip" }

                (trip_form_fields(values))

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Update Trip"
                }
            }
        }
    };

    base("Edit Trip", &[rupee_input_styles()], &content)
}

/// The state needed for the edit trip page.
#[derive(Debug, Clone)]
pub struct EditTripPageState {
    /// The database connection for accessing trips.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditTripPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the page for editing a trip.
///
/// Trips that do not exist or belong to another user get the 404 page.
pub async fn get_edit_trip_page(
    State(state): State<EditTripPageState>,
    Extension(user_id): Extension<UserID>,
    Path(trip_id): Path<TripId>,
) -> Result<Response, Error> {
    let trip = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_trip(trip_id, user_id, &connection).inspect_err(|error| {
            if *error != Error::NotFound {
                tracing::error!("Failed to retrieve trip {trip_id}: {error}");
            }
        })?
    };

    Ok(edit_trip_view(trip_id, &TripForm::from(&trip)).into_response())
}
