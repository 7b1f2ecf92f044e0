//! The public landing page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{endpoints, html::base};

const GET_STARTED_STYLE: &str = "inline-flex px-5 py-2.5 text-sm font-medium text-white \
    bg-blue-600 hover:bg-blue-700 rounded dark:bg-blue-600 dark:hover:bg-blue-700";

const FEATURES: [(&str, &str); 3] = [
    (
        "Easy Record Keeping",
        "Quickly add trips with all expenses in one place. No more messy books.",
    ),
    (
        "Instant Reports",
        "View summaries, search records, and export data to CSV anytime.",
    ),
    (
        "Secure & Private",
        "Your data stays behind your own log in on your own server.",
    ),
];

fn feature_card(title: &str, description: &str) -> Markup {
    html! {
        div class="text-center p-6 bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700"
        {
            h3 class="text-xl font-semibold mb-2" { (title) }
            p class="text-gray-600 dark:text-gray-400" { (description) }
        }
    }
}

fn landing_view() -> Markup {
    let content = html! {
        header class="border-b border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800"
        {
            div class="mx-auto max-w-6xl px-4 py-4 flex items-center justify-between text-gray-900 dark:text-white"
            {
                div
                {
                    h1 class="text-xl font-bold" { "Trip Ledger" }
                    p class="text-sm text-gray-600 dark:text-gray-400" { "Trip & Expense Manager" }
                }

                a href=(endpoints::LOG_IN_VIEW) class=(GET_STARTED_STYLE) { "Get Started" }
            }
        }

        main class="mx-auto max-w-6xl px-4 py-16 text-gray-900 dark:text-white"
        {
            div class="text-center mb-16"
            {
                h2 class="text-4xl md:text-5xl font-bold mb-4" { "Manage Your Logistics Business Digitally" }
                p class="text-xl text-gray-600 dark:text-gray-400 max-w-2xl mx-auto"
                {
                    "Replace handwritten books with a simple, secure digital solution to track trips and expenses."
                }
            }

            div class="grid md:grid-cols-3 gap-8"
            {
                @for (title, description) in FEATURES {
                    (feature_card(title, description))
                }
            }
        }
    };

    base("Trip Ledger", &[], &content)
}

/// Display the landing page.
pub async fn get_landing_page() -> Response {
    landing_view().into_response()
}
