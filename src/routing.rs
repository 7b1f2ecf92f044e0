//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{
        auth_guard, auth_guard_hx, get_log_in_page, get_log_out, get_register_page, post_log_in,
        register_user,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    landing::get_landing_page,
    not_found::get_404_not_found,
    summary::{get_category_breakdown, get_dashboard_page, get_dashboard_summary},
    trip::{
        create_trip_endpoint, delete_trip_endpoint, edit_trip_endpoint, export_trips,
        get_create_trip_page, get_edit_trip_page, get_trips_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_landing_page))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::REGISTER_VIEW, get(get_register_page))
        .route(endpoints::USERS, post(register_user))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRIPS_VIEW, get(get_trips_page))
        .route(endpoints::NEW_TRIP_VIEW, get(get_create_trip_page))
        .route(endpoints::EDIT_TRIP_VIEW, get(get_edit_trip_page))
        .route(endpoints::TRIPS_EXPORT, get(export_trips))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // These routes need to use the HX-REDIRECT header for auth redirects to work properly for HTMX requests.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::TRIPS_API, post(create_trip_endpoint))
            .route(
                endpoints::TRIP,
                put(edit_trip_endpoint).delete(delete_trip_endpoint),
            )
            .route(endpoints::DASHBOARD_SUMMARY, get(get_dashboard_summary))
            .route(endpoints::CATEGORY_BREAKDOWN, get(get_category_breakdown))
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
