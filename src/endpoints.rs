//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/trips/{trip_id}', use [format_endpoint].

/// The landing page.
pub const ROOT: &str = "/";
/// The page for logged in users with the trip summary.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for listing, searching and deleting a user's trips.
pub const TRIPS_VIEW: &str = "/trips";
/// The page for recording a new trip.
pub const NEW_TRIP_VIEW: &str = "/trips/new";
/// The page for editing an existing trip.
pub const EDIT_TRIP_VIEW: &str = "/trips/{trip_id}/edit";
/// The route for downloading the (filtered) trips as a CSV file.
pub const TRIPS_EXPORT: &str = "/trips/export";
/// The route for getting the registration page.
pub const REGISTER_VIEW: &str = "/register";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create users.
pub const USERS: &str = "/api/users";
/// The route to create trips.
pub const TRIPS_API: &str = "/api/trips";
/// The route to update or delete a single trip.
pub const TRIP: &str = "/api/trips/{trip_id}";
/// The route for the dashboard summary fragment.
pub const DASHBOARD_SUMMARY: &str = "/api/dashboard/summary";
/// The route for the per-vehicle breakdown of one expense category.
pub const CATEGORY_BREAKDOWN: &str = "/api/dashboard/breakdown";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/trips/{trip_id}', '{trip_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    #[track_caller]
    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        for endpoint in [
            endpoints::ROOT,
            endpoints::DASHBOARD_VIEW,
            endpoints::TRIPS_VIEW,
            endpoints::NEW_TRIP_VIEW,
            endpoints::EDIT_TRIP_VIEW,
            endpoints::TRIPS_EXPORT,
            endpoints::REGISTER_VIEW,
            endpoints::LOG_IN_VIEW,
            endpoints::INTERNAL_ERROR_VIEW,
            endpoints::STATIC,
            endpoints::LOG_IN_API,
            endpoints::LOG_OUT,
            endpoints::USERS,
            endpoints::TRIPS_API,
            endpoints::TRIP,
            endpoints::DASHBOARD_SUMMARY,
            endpoints::CATEGORY_BREAKDOWN,
        ] {
            assert_endpoint_is_valid_uri(endpoint);
        }
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::TRIP, 1);

        assert_eq!(formatted_path, "/api/trips/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::TRIPS_VIEW, 1);

        assert_eq!(formatted_path, "/trips");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EDIT_TRIP_VIEW, 42);

        assert_eq!(formatted_path, "/trips/42/edit");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
