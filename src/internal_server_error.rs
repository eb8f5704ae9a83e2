//! The 500 page, shown when a request fails on the server side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_page_response;

/// What went wrong and what the user can do about it.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "The records could not be loaded.",
            fix: "Reload the page in a moment. If it keeps failing, the server log has the details.",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        error_page_response(StatusCode::INTERNAL_SERVER_ERROR, self.description, self.fix)
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        endpoints,
        internal_server_error::{InternalServerError, get_internal_server_error_page},
        test_utils::{assert_content_type, assert_valid_html, must_get_text, parse_html_document},
    };

    #[tokio::test]
    async fn renders_500_page_with_link_to_records() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_eq!(must_get_text(&html, "h1"), "500");
        assert_eq!(must_get_text(&html, "title"), "Internal Server Error - Registro");
        let back_link = html
            .select(&scraper::Selector::parse("section a").unwrap())
            .next()
            .expect("back link missing");
        assert_eq!(back_link.value().attr("href"), Some(endpoints::RECORDS_VIEW));
    }

    #[tokio::test]
    async fn shows_custom_description_and_fix() {
        let response = InternalServerError {
            description: "Invalid Timezone Settings",
            fix: "Set a canonical timezone",
        }
        .into_response();

        let html = parse_html_document(response).await;
        assert_eq!(must_get_text(&html, "section p"), "Invalid Timezone Settings");
        assert!(html.html().contains("Set a canonical timezone"));
    }
}
