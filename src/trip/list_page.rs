//! The trip list page with the search box and row actions.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    auth::UserID,
    endpoints::{self, format_endpoint},
    html::{
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, edit_delete_action_links, format_currency,
    },
    navigation::NavBar,
    trip::{Trip, core::get_trips, filter::filter_trips},
};

const DELETE_CONFIRM_MESSAGE: &str =
    "This action cannot be undone. This will permanently delete the trip record.";

const SEARCH_PLACEHOLDER: &str = "Search by date, trip ID, vehicle, or driver...";

/// The state needed for the trip list page.
#[derive(Debug, Clone)]
pub struct TripsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TripsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The search term shared by the trip list and the CSV export.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

/// Render the current user's trips that match the search term, newest first.
pub async fn get_trips_page(
    State(state): State<TripsPageState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let trips = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_trips(user_id, &connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve trips: {error}"))?
    };

    let trips = filter_trips(trips, &query.search);

    Ok(trips_view(&trips, &query.search).into_response())
}

fn export_url(search: &str) -> String {
    if search.is_empty() {
        return endpoints::TRIPS_EXPORT.to_owned();
    }

    match serde_urlencoded::to_string([("search", search)]) {
        Ok(query) => format!("{}?{query}", endpoints::TRIPS_EXPORT),
        Err(error) => {
            tracing::warn!("Could not encode search term {search:?}: {error}");
            endpoints::TRIPS_EXPORT.to_owned()
        }
    }
}

fn trip_row(trip: &Trip) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRIP_VIEW, trip.id);
    let delete_url = format_endpoint(endpoints::TRIP, trip.id);
    let profit = trip.profit();
    let profit_style = if profit < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-green-600 dark:text-green-400"
    };

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (trip.date) }
            td class=(TABLE_CELL_STYLE) { (trip.trip_id) }
            td class=(TABLE_CELL_STYLE) { (trip.vehicle) }
            td class=(TABLE_CELL_STYLE) { (trip.driver_name) }
            td class=(TABLE_CELL_STYLE) { (format_currency(trip.revenue)) }
            td class=(TABLE_CELL_STYLE) { (format_currency(trip.total_expenses())) }
            td class={ (TABLE_CELL_STYLE) " " (profit_style) } { (format_currency(profit)) }
            td class=(TABLE_CELL_STYLE)
            {
                (edit_delete_action_links(&edit_url, &delete_url, DELETE_CONFIRM_MESSAGE))
            }
        }
    }
}

// The export link must stay inside `#trips-table` to follow the search swap.
fn trips_table(trips: &[Trip], search: &str) -> Markup {
    html! {
        div id="trips-table" class="w-full overflow-x-auto"
        {
            div class="mb-2 flex justify-between items-center gap-2"
            {
                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Showing " (trips.len()) @if trips.len() == 1 { " trip" } @else { " trips" }
                }

                a href=(export_url(search)) class=(LINK_STYLE) { "Export CSV" }
            }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for heading in ["Date", "Trip ID", "Vehicle", "Driver", "Revenue", "Expenses", "Profit", "Actions"] {
                            th scope="col" class=(TABLE_CELL_STYLE) { (heading) }
                        }
                    }
                }

                tbody
                {
                    @for trip in trips {
                        (trip_row(trip))
                    }

                    @if trips.is_empty() {
                        tr
                        {
                            td
                                colspan="8"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No trips found"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn trips_view(trips: &[Trip], search: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRIPS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-6xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end gap-2"
                {
                    h1 class="text-xl font-bold" { "Trips" }

                    a href=(endpoints::NEW_TRIP_VIEW) class=(LINK_STYLE) { "Add Trip" }
                }

                input
                    type="search"
                    name="search"
                    id="search"
                    value=(search)
                    placeholder=(SEARCH_PLACEHOLDER)
                    autocomplete="off"
                    hx-get=(endpoints::TRIPS_VIEW)
                    hx-trigger="input changed delay:300ms, search"
                    hx-target="#trips-table"
                    hx-select="#trips-table"
                    hx-swap="outerHTML"
                    hx-push-url="true"
                    class=(FORM_TEXT_INPUT_STYLE);

                (trips_table(trips, search))
            }
        }
    };

    base("Trips", &[], &content)
}
