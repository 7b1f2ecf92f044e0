use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

/// Read the whole response body as text.
pub(crate) async fn response_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of each paragraph in an alert, i.e. the message followed
/// by the details.
pub(crate) fn alert_text(html: &Html) -> Vec<String> {
    html.select(&Selector::parse("p").unwrap())
        .map(|p| p.text().collect::<String>().trim().to_owned())
        .collect()
}
