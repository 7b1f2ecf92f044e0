//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The dashboard page with the date range form and the summary
//! - The summary fragment requested whenever the range changes
//! - The per-vehicle breakdown of one expense category

use std::{
    ops::RangeInclusive,
    sync::{Arc, Mutex},
};

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    auth::UserID,
    endpoints,
    html::{
        CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        loading_spinner,
    },
    navigation::NavBar,
    summary::{
        aggregation::{TripTotals, vehicle_breakdown},
        cards::{breakdown_dialog, summary_view},
        category::ExpenseCategory,
        metrics::SummaryMetrics,
        query::{get_category_amounts, get_trips_in_date_range},
        range::DateRangeQuery,
    },
    timezone::get_local_date,
};

/// The state needed for the dashboard and its fragments.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading trips.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// Which figures to compute and show.
    pub summary_metrics: SummaryMetrics,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            summary_metrics: state.summary_metrics,
        }
    }
}

/// The query parameters for the per-vehicle breakdown.
#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub category: ExpenseCategory,
}

fn resolve_date_range(
    query: &DateRangeQuery,
    local_timezone: &str,
) -> Result<RangeInclusive<Date>, Error> {
    let today = get_local_date(local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", local_timezone);
        Error::InvalidTimezoneError(local_timezone.to_owned())
    })?;

    Ok(query.resolve(today))
}

/// Fetches the trips in `date_range` and sums them.
fn build_totals(
    date_range: &RangeInclusive<Date>,
    user_id: UserID,
    db_connection: &Mutex<Connection>,
) -> Result<TripTotals, Error> {
    let connection = db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let trips = get_trips_in_date_range(date_range, user_id, &connection).inspect_err(|error| {
        tracing::error!(
            "Could not get trips from {} to {}: {error}",
            date_range.start(),
            date_range.end()
        )
    })?;

    Ok(TripTotals::from_trips(&trips))
}

fn dashboard_url(date_range: &RangeInclusive<Date>) -> String {
    format!(
        "{}?from={}&to={}",
        endpoints::DASHBOARD_VIEW,
        date_range.start(),
        date_range.end()
    )
}

fn date_range_form(date_range: &RangeInclusive<Date>) -> Markup {
    html! {
        form
            hx-get=(endpoints::DASHBOARD_SUMMARY)
            hx-trigger="change"
            hx-target="#summary"
            hx-swap="outerHTML"
            hx-sync="this:replace"
            hx-indicator="#summary-indicator"
            class="flex flex-wrap items-end gap-4"
        {
            div
            {
                label for="from" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    name="from"
                    id="from"
                    value=(date_range.start())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="to" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    name="to"
                    id="to"
                    value=(date_range.end())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            span id="summary-indicator" class="htmx-indicator mb-2" { (loading_spinner()) }
        }
    }
}

fn quick_links() -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 gap-4 w-full"
        {
            a href=(endpoints::NEW_TRIP_VIEW) class={ (CARD_STYLE) " hover:shadow-lg transition-shadow" }
            {
                h3 class="font-semibold" { "Add New Trip" }
                p class="text-sm text-gray-600 dark:text-gray-400" { "Record a trip and its expenses" }
            }

            a href=(endpoints::TRIPS_VIEW) class={ (CARD_STYLE) " hover:shadow-lg transition-shadow" }
            {
                h3 class="font-semibold" { "View All Trips" }
                p class="text-sm text-gray-600 dark:text-gray-400" { "Search, edit and export trips" }
            }
        }
    }
}

fn dashboard_view(
    totals: &TripTotals,
    date_range: &RangeInclusive<Date>,
    metrics: SummaryMetrics,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-6xl space-y-6"
            {
                h1 class="text-xl font-bold" { "Dashboard" }

                (quick_links())
                (date_range_form(date_range))
                (summary_view(totals, date_range, metrics))

                div id="breakdown" {}
            }
        }
    };

    base("Dashboard", &[], &content)
}

/// Display the totals of the current user's trips within the requested range.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Response, Error> {
    let date_range = resolve_date_range(&query, &state.local_timezone)?;
    let totals = build_totals(&date_range, user_id, &state.db_connection)?;

    Ok(dashboard_view(&totals, &date_range, state.summary_metrics).into_response())
}

/// Render only the summary for the requested range.
///
/// On failure the error is logged and the response has an empty body, so the
/// totals already on screen are left in place.
pub async fn get_dashboard_summary(
    State(state): State<DashboardState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<DateRangeQuery>,
) -> Response {
    let result = resolve_date_range(&query, &state.local_timezone).and_then(|date_range| {
        build_totals(&date_range, user_id, &state.db_connection)
            .map(|totals| (date_range, totals))
    });

    match result {
        Ok((date_range, totals)) => (
            [("HX-Push-Url", dashboard_url(&date_range))],
            summary_view(&totals, &date_range, state.summary_metrics),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not build dashboard summary: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Render the per-vehicle totals of one expense category in a modal.
pub async fn get_category_breakdown(
    State(state): State<DashboardState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<BreakdownQuery>,
) -> Response {
    if !state.summary_metrics.drill_down {
        return Error::NotFound.into_alert_response();
    }

    let range_query = DateRangeQuery {
        from: query.from,
        to: query.to,
    };
    let date_range = match resolve_date_range(&range_query, &state.local_timezone) {
        Ok(date_range) => date_range,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match get_category_amounts(query.category, &date_range, user_id, &connection) {
        Ok(amounts) => {
            breakdown_dialog(query.category, &vehicle_breakdown(amounts)).into_response()
        }
        Err(error) => {
            tracing::error!(
                "Could not get {} amounts per vehicle: {error}",
                query.category.label()
            );
            error.into_alert_response()
        }
    }
}
