//! The registration page for creating an account.
use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Duration;

use crate::{
    AppState, Error,
    auth::{Email, PasswordHash, ValidatedPassword, create_user, set_auth_cookie},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, email_input,
        loading_spinner, log_in_register, password_input,
    },
    internal_server_error::get_internal_server_error_redirect,
    timezone::get_local_offset,
};

/// The minimum number of characters the password should have to be considered
/// valid on the client side. The server checks the strength on top of this.
const PASSWORD_INPUT_MIN_LENGTH: u8 = 14;

const DUPLICATE_EMAIL_ERROR_MSG: &str = "An account with this email already exists";
const PASSWORD_MISMATCH_ERROR_MSG: &str = "Passwords do not match";

fn confirm_password_input(min_length: u8, error_message: Option<&str>) -> Markup {
    html! {
        div
        {
            label
                for="confirm-password"
                class=(FORM_LABEL_STYLE)
            {
                "Confirm Password"
            }

            input
                type="password"
                name="confirm_password"
                id="confirm-password"
                placeholder="••••••••"
                class=(FORM_TEXT_INPUT_STYLE)
                required
                minlength=(min_length)
                autofocus[error_message.is_some()]
            ;

            @if let Some(error_message) = error_message
            {
                p class="text-red-500 text-base" { (error_message) }
            }
        }
    }
}

/// The error messages shown next to each field of the registration form.
#[derive(Default)]
struct RegistrationErrors<'a> {
    email: Option<&'a str>,
    password: Option<&'a str>,
    confirm_password: Option<&'a str>,
}

fn registration_form(email: &str, errors: RegistrationErrors) -> Markup {
    html! {
        form
            hx-post=(endpoints::USERS)
            hx-indicator="#indicator"
            hx-disabled-elt="#email, #password, #confirm-password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            (email_input(email, errors.email))
            (password_input("", PASSWORD_INPUT_MIN_LENGTH, errors.password))
            (confirm_password_input(PASSWORD_INPUT_MIN_LENGTH, errors.confirm_password))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Create Account"
            }

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "

                a
                    href=(endpoints::LOG_IN_VIEW) tabindex="0"
                    class="font-semibold leading-6 text-blue-600 hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400"
                {
                  "Log in here"
                }
            }
        }
    }
}

/// Display the registration page.
pub async fn get_register_page() -> Response {
    let registration_form = registration_form("", RegistrationErrors::default());
    let content = log_in_register("Create an account", &registration_form);

    base("Register", &[], &content).into_response()
}

/// The state needed for creating a new user.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RegistrationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<RegistrationState> for Key {
    fn from_ref(state: &RegistrationState) -> Self {
        state.cookie_key.clone()
    }
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Create an account, log the new user in and send them to the dashboard.
///
/// Invalid input re-renders the form with an error message next to the
/// offending field.
pub async fn register_user(
    State(state): State<RegistrationState>,
    jar: PrivateCookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let email = match Email::new(&form.email) {
        Ok(email) => email,
        Err(error) => {
            let message = error.to_string();
            return registration_form(
                &form.email,
                RegistrationErrors {
                    email: Some(&message),
                    ..Default::default()
                },
            )
            .into_response();
        }
    };

    let validated_password = match ValidatedPassword::new(&form.password) {
        Ok(password) => password,
        Err(error) => {
            let message = error.to_string();
            return registration_form(
                &form.email,
                RegistrationErrors {
                    password: Some(&message),
                    ..Default::default()
                },
            )
            .into_response();
        }
    };

    if form.password != form.confirm_password {
        return registration_form(
            &form.email,
            RegistrationErrors {
                confirm_password: Some(PASSWORD_MISMATCH_ERROR_MSG),
                ..Default::default()
            },
        )
        .into_response();
    }

    let password_hash = match PasswordHash::new(validated_password, PasswordHash::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(error) => {
            tracing::error!("an error occurred while hashing a password: {error}");
            return get_internal_server_error_redirect();
        }
    };

    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        return Error::InvalidTimezoneError(state.local_timezone).into_response();
    };

    let user = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return get_internal_server_error_redirect();
            }
        };

        match create_user(email, password_hash, &connection) {
            Ok(user) => user,
            Err(Error::DuplicateEmail) => {
                return registration_form(
                    &form.email,
                    RegistrationErrors {
                        email: Some(DUPLICATE_EMAIL_ERROR_MSG),
                        ..Default::default()
                    },
                )
                .into_response();
            }
            Err(error) => {
                tracing::error!("An unhandled error occurred while inserting a new user: {error}");
                return get_internal_server_error_redirect();
            }
        }
    };

    match set_auth_cookie(jar, user.id, state.cookie_duration, local_offset) {
        Ok(jar) => (
            StatusCode::SEE_OTHER,
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            jar,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An error occurred while setting the auth cookie: {error}");
            get_internal_server_error_redirect()
        }
    }
}

#[cfg(test)]
mod get_register_page_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input, assert_form_submit_button,
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    use super::get_register_page;

    #[tokio::test]
    async fn render_register_page() {
        let response = get_register_page().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::USERS, "hx-post");
        assert_form_input(&form, "email", "email");
        assert_form_input(&form, "password", "password");
        assert_form_input(&form, "confirm_password", "password");
        assert_form_submit_button(&form);
    }
}
