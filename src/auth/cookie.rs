//! Defines functions for handling user authentication with cookies.
//!
//! The auth cookie holds a JSON serialised [Token] in a private (encrypted)
//! cookie, so the expiry cannot be tampered with by the client.

use std::cmp::max;

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    auth::{Token, UserID},
};

pub(crate) const COOKIE_TOKEN: &str = "token";
/// The default duration for which auth cookies are valid.
pub const DEFAULT_COOKIE_DURATION: Duration = Duration::minutes(5);

/// Add an auth cookie to the cookie jar, indicating that a user is logged in and authenticated.
///
/// Sets the initial expiry of the cookie to `duration` from the current time.
/// You can use [DEFAULT_COOKIE_DURATION] for the default duration.
///
/// Returns the cookie jar with the cookie added.
///
/// # Errors
///
/// Returns an [Error::JSONSerializationError] if the token could not be serialized.
pub fn set_auth_cookie(
    jar: PrivateCookieJar,
    user_id: UserID,
    duration: Duration,
    local_offset: UtcOffset,
) -> Result<PrivateCookieJar, Error> {
    let expires_at = OffsetDateTime::now_utc().to_offset(local_offset) + duration;

    set_token_cookie(
        jar,
        Token {
            user_id,
            expires_at,
        },
    )
}

fn set_token_cookie(jar: PrivateCookieJar, token: Token) -> Result<PrivateCookieJar, Error> {
    let token_string = serde_json::to_string(&token)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((COOKIE_TOKEN, token_string))
            .expires(token.expires_at)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    ))
}

/// Set the auth cookie to an invalid value and set its max age to zero, which should delete the cookie on the client side.
pub fn invalidate_auth_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_TOKEN, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Read and check the token in the auth cookie.
///
/// # Errors
///
/// Returns:
/// - [Error::CookieMissing] if there is no auth cookie in `jar`.
/// - [Error::InvalidCredentials] if the cookie does not hold a token or the token has expired.
pub(crate) fn get_token_from_cookies(jar: &PrivateCookieJar) -> Result<Token, Error> {
    let cookie = jar.get(COOKIE_TOKEN).ok_or(Error::CookieMissing)?;
    let token: Token =
        serde_json::from_str(cookie.value_trimmed()).map_err(|_| Error::InvalidCredentials)?;

    if token.expires_at <= OffsetDateTime::now_utc() {
        return Err(Error::InvalidCredentials);
    }

    Ok(token)
}

/// Set the expiry of the auth cookie in `jar` to the latest of now plus
/// `duration` and the token's current expiry.
///
/// # Errors
///
/// The cookie jar is not modified if an error is returned.
///
/// Returns:
/// - [Error::CookieMissing] or [Error::InvalidCredentials] if the jar does not hold a valid token.
/// - [Error::InvalidDateFormat] if extending the cookie by `duration` would overflow the date time.
pub(crate) fn extend_auth_cookie_duration_if_needed(
    jar: PrivateCookieJar,
    duration: Duration,
    local_offset: UtcOffset,
) -> Result<PrivateCookieJar, Error> {
    let token = get_token_from_cookies(&jar)?;
    let now = OffsetDateTime::now_utc().to_offset(local_offset);
    let new_expiry = now.checked_add(duration).ok_or_else(|| {
        Error::InvalidDateFormat(
            format!("adding {duration} overflows the date time"),
            now.to_string(),
        )
    })?;

    set_token_cookie(
        jar,
        Token {
            user_id: token.user_id,
            expires_at: max(token.expires_at, new_expiry),
        },
    )
}
