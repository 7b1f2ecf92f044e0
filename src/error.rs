//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The generic message shown when an error carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user provided an unknown email or the wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The auth token cookie is missing from the cookie jar in the request.
    #[error("no cookies in the cookie jar :(")]
    CookieMissing,

    /// There was an error parsing the date in the cookie or creating the new
    /// expiry date time.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not format expiry cookie date-time string \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// The user provided a password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The user provided a string that is not an email address.
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    /// An account already exists for the email address.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// The submitted trip failed validation.
    ///
    /// Holds the message for the first rule that failed.
    #[error("{0}")]
    InvalidTrip(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The trips could not be written as CSV.
    #[error("could not write CSV: {0}")]
    CsvError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a trip that does not exist or belongs to another user.
    #[error("tried to update a trip that is not in the database")]
    UpdateMissingTrip,

    /// Tried to delete a trip that does not exist or belongs to another user.
    #[error("tried to delete a trip that is not in the database")]
    DeleteMissingTrip,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("user.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::InvalidTrip(reason) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid trip details".to_owned(),
                    details: reason,
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The requested trip could not be found.".to_owned(),
                },
            ),
            Error::UpdateMissingTrip => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update trip".to_owned(),
                    details: "The trip could not be found.".to_owned(),
                },
            ),
            Error::DeleteMissingTrip => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete trip".to_owned(),
                    details: "The trip could not be found. \
                    Try refreshing the page to see if the trip has already been deleted."
                        .to_owned(),
                },
            ),
            // The store's own message is shown as is.
            Error::SqlError(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: store_message(&error),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: FALLBACK_ERROR_MESSAGE.to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

fn store_message(error: &rusqlite::Error) -> String {
    let message = error.to_string();

    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rusqlite::Connection;

    use crate::{
        Error,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn invalid_trip_alert_shows_rule_message() {
        let response =
            Error::InvalidTrip("Trip ID is required".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Invalid trip details"));
        assert!(text.contains("Trip ID is required"));
    }

    #[tokio::test]
    async fn sql_error_alert_shows_store_message() {
        let connection = Connection::open_in_memory().unwrap();
        let sql_error = connection
            .execute("SELECT * FROM table_that_does_not_exist", ())
            .unwrap_err();
        let want_details = sql_error.to_string();

        let response = Error::SqlError(sql_error).into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains(&want_details),
            "want alert to contain {want_details:?}, got {text:?}"
        );
    }

    #[tokio::test]
    async fn other_errors_use_fallback_message() {
        let response = Error::DatabaseLockError.into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains(super::FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
