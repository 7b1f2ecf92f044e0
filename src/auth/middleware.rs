//! Authentication middleware that validates cookies, extends sessions, and handles redirects.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use time::Duration;

use crate::{
    AppState,
    auth::{
        DEFAULT_COOKIE_DURATION,
        cookie::{extend_auth_cookie_duration_if_needed, get_token_from_cookies},
        redirect::{build_log_in_redirect_url, build_log_in_redirect_url_from_target},
    },
    endpoints,
    timezone::get_local_offset,
};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            local_timezone: state.local_timezone.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Resolve the logged in user from the auth cookie, run the request and then
/// push the cookie expiry out to at least [DEFAULT_COOKIE_DURATION] from now.
///
/// Requests without a valid cookie get the response from `get_redirect`.
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn(&str) -> Response,
) -> Response {
    let log_in_redirect_url = build_log_in_redirect_url(&request).unwrap_or_else(|| {
        tracing::warn!(
            "Could not build redirect URL for {}. Falling back to dashboard.",
            request.uri()
        );

        build_log_in_redirect_url_from_target(endpoints::DASHBOARD_VIEW)
            .unwrap_or_else(|| endpoints::LOG_IN_VIEW.to_owned())
    });

    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!(
            "Invalid timezone {}. Redirecting to log in page.",
            state.local_timezone
        );
        return get_redirect(&log_in_redirect_url);
    };

    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Error getting cookie jar: {error:?}. Redirecting to log in page.");
            return get_redirect(&log_in_redirect_url);
        }
    };

    let user_id = match get_token_from_cookies(&jar) {
        Ok(token) => token.user_id,
        Err(error) => {
            tracing::debug!("Rejected auth cookie: {error}");
            return get_redirect(&log_in_redirect_url);
        }
    };

    parts.extensions.insert(user_id);
    let response = next.run(Request::from_parts(parts, body)).await;

    let jar = match extend_auth_cookie_duration_if_needed(
        jar.clone(),
        DEFAULT_COOKIE_DURATION,
        local_offset,
    ) {
        Ok(updated_jar) => updated_jar,
        Err(error) => {
            tracing::error!("Error extending cookie duration: {error}. Rolling back cookie jar.");
            jar
        }
    };

    let (mut parts, body) = response.into_parts();

    for cookie_header in jar.into_response().headers().get_all(SET_COOKIE) {
        parts.headers.append(SET_COOKIE, cookie_header.to_owned());
    }

    Response::from_parts(parts, body)
}

/// Guard for full page routes: redirects (303) to the log-in page when the
/// user is not logged in.
///
/// Route handlers receive the user with `Extension(user_id): Extension<UserID>`.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        Redirect::to(redirect_url).into_response()
    })
    .await
}

/// Guard for HTMX routes: responds with an `HX-Redirect` to the log-in page
/// when the user is not logged in.
///
/// Route handlers receive the user with `Extension(user_id): Extension<UserID>`.
pub async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        (HxRedirect(redirect_url.to_owned()), StatusCode::OK).into_response()
    })
    .await
}
