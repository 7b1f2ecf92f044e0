//! Defines the route handler for the page for recording a new trip.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, loading_spinner, rupee_input_styles},
    navigation::NavBar,
    timezone::get_local_date,
    trip::form::{TripForm, trip_form_fields},
};

fn create_trip_view(values: &TripForm) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRIP_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::TRIPS_API)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Trip" }

                (trip_form_fields(values))

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Save Trip"
                }
            }
        }
    };

    base("New Trip", &[rupee_input_styles()], &content)
}

/// The state needed for the new trip page.
#[derive(Debug, Clone)]
pub struct CreateTripPageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTripPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for recording a trip, with the date set to today.
pub async fn get_create_trip_page(
    State(state): State<CreateTripPageState>,
) -> Result<Response, Error> {
    let today = get_local_date(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    let values = TripForm {
        date: today.to_string(),
        ..Default::default()
    };

    Ok(create_trip_view(&values).into_response())
}
