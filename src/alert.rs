//! Alert messages for reporting the outcome of HTMX requests.
//!
//! Alerts are swapped into the `#alert-container` element that [crate::html::base]
//! places at the bottom of every page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// A transient success or error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message with no further details.
    SuccessSimple { message: String },
    /// An error message with details on what went wrong.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::SuccessSimple { message } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 shadow-lg",
                message,
                None,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 shadow-lg",
                message,
                Some(details),
            ),
        };

        html! {
            div
                role="alert"
                class=(container_style)
                hx-on::load="document.getElementById('alert-container').classList.remove('hidden')"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if let Some(details) = details {
                            @if !details.is_empty() {
                                p class="mt-1" { (details) }
                            }
                        }
                    }

                    button
                        type="button"
                        aria-label="Close"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = match self {
            Alert::SuccessSimple { .. } => StatusCode::OK,
            Alert::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::test_utils::{assert_valid_html, parse_html_fragment};

    use super::Alert;

    #[tokio::test]
    async fn success_alert_shows_message() {
        let response = Alert::SuccessSimple {
            message: "Trip deleted successfully".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let paragraph = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .expect("Could not find message paragraph");
        assert_eq!(
            paragraph.text().collect::<String>(),
            "Trip deleted successfully"
        );
    }

    #[tokio::test]
    async fn error_alert_shows_message_and_details() {
        let response = Alert::Error {
            message: "Could not delete trip".to_owned(),
            details: "The trip could not be found.".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = parse_html_fragment(response).await;
        let paragraphs = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            paragraphs,
            vec!["Could not delete trip", "The trip could not be found."]
        );
    }
}
