//! Helpers for the `redirect_url` carried through the log-in page.
//!
//! Only same-site relative paths are honoured, and never the log-in or
//! registration pages themselves.

use axum::{extract::Request, http::Uri};

use crate::endpoints;

fn is_safe_redirect_path(path_and_query: &str) -> bool {
    if !path_and_query.starts_with('/') || path_and_query.starts_with("//") {
        return false;
    }

    let path = path_and_query
        .split_once('?')
        .map_or(path_and_query, |(path, _)| path);

    path != endpoints::LOG_IN_VIEW && path != endpoints::REGISTER_VIEW
}

/// Reduce `raw_url` to a same-site path and query, or `None` if it points elsewhere.
pub fn normalize_redirect_url(raw_url: &str) -> Option<String> {
    let uri = raw_url.parse::<Uri>().ok()?;

    if uri.scheme().is_some() || uri.authority().is_some() {
        return None;
    }

    let path_and_query = uri.path_and_query()?.as_str();

    is_safe_redirect_path(path_and_query).then(|| path_and_query.to_owned())
}

/// The log-in URL that sends the user back to the page they requested.
///
/// HTMX requests to `/api` routes return to the page that made the request
/// (the `HX-Current-URL` header), other requests return to their own URI.
pub fn build_log_in_redirect_url(request: &Request) -> Option<String> {
    let redirect_target = if request.uri().path().starts_with("/api") {
        redirect_target_from_hx_request(request)?
    } else {
        normalize_redirect_url(request.uri().path_and_query()?.as_str())?
    };

    build_log_in_redirect_url_from_target(&redirect_target)
}

pub(super) fn build_log_in_redirect_url_from_target(redirect_target: &str) -> Option<String> {
    match serde_urlencoded::to_string([("redirect_url", redirect_target)]) {
        Ok(param) => Some(format!("{}?{}", endpoints::LOG_IN_VIEW, param)),
        Err(error) => {
            tracing::error!("Could not encode redirect URL {redirect_target}: {error}");
            None
        }
    }
}

fn redirect_target_from_hx_request(request: &Request) -> Option<String> {
    let headers = request.headers();
    let is_hx_request = headers
        .get("hx-request")
        .and_then(|header| header.to_str().ok())
        .is_some_and(|header| header.eq_ignore_ascii_case("true"));

    if !is_hx_request {
        tracing::warn!("Missing HX-Request header for /api request.");
        return None;
    }

    let Some(current_url) = headers
        .get("hx-current-url")
        .and_then(|header| header.to_str().ok())
    else {
        tracing::warn!("Missing HX-Current-URL header for /api request.");
        return None;
    };

    // HX-Current-URL is absolute, so only its path and query are kept.
    let redirect_url = current_url
        .parse::<Uri>()
        .ok()
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_owned()))
        .filter(|path_and_query| is_safe_redirect_path(path_and_query));

    if redirect_url.is_none() {
        tracing::warn!("Invalid HX-Current-URL header value: {current_url}");
    }

    redirect_url
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::Request};

    use crate::endpoints;

    use super::{build_log_in_redirect_url, normalize_redirect_url};

    #[test]
    fn keeps_relative_path_and_query() {
        assert_eq!(
            normalize_redirect_url("/trips?search=KA-01").as_deref(),
            Some("/trips?search=KA-01")
        );
    }

    #[test]
    fn rejects_other_sites() {
        assert_eq!(normalize_redirect_url("https://example.com/trips"), None);
        assert_eq!(normalize_redirect_url("//example.com/trips"), None);
    }

    #[test]
    fn rejects_auth_pages() {
        assert_eq!(normalize_redirect_url(endpoints::LOG_IN_VIEW), None);
        assert_eq!(normalize_redirect_url(endpoints::REGISTER_VIEW), None);
    }

    #[test]
    fn api_request_uses_current_url() {
        let request = Request::builder()
            .uri(endpoints::DASHBOARD_SUMMARY)
            .header("HX-Request", "true")
            .header(
                "HX-Current-URL",
                "https://localhost:3000/dashboard?from=2025-01-01&to=2025-01-31",
            )
            .body(Body::empty())
            .unwrap();

        let want = format!(
            "{}?{}",
            endpoints::LOG_IN_VIEW,
            serde_urlencoded::to_string([("redirect_url", "/dashboard?from=2025-01-01&to=2025-01-31")])
                .unwrap()
        );

        assert_eq!(build_log_in_redirect_url(&request), Some(want));
    }

    #[test]
    fn api_request_without_htmx_headers_has_no_target() {
        let request = Request::builder()
            .uri(endpoints::TRIPS_API)
            .body(Body::empty())
            .unwrap();

        assert_eq!(build_log_in_redirect_url(&request), None);
    }
}
