//! The page shown when a route or resource does not exist.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The 404 page.
pub struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Html(
                error_view(
                    "Not Found",
                    "404",
                    "Something's missing.",
                    "Sorry, we can't find that page. You'll find lots to explore on the dashboard.",
                )
                .into_string(),
            ),
        )
            .into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        not_found::get_404_not_found,
        test_utils::{assert_valid_html, parse_html_document},
    };

    #[tokio::test]
    async fn not_found_page_has_404_heading() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let heading = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No heading found");
        assert_eq!(heading.text().collect::<String>().trim(), "404");
    }
}
