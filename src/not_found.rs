//! The 404 page for unknown routes and missing resources.

use axum::{http::StatusCode, response::Response};

use crate::html::error_page_response;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    error_page_response(
        StatusCode::NOT_FOUND,
        "Nothing here.",
        "The page or record you asked for does not exist. It may have been deleted.",
    )
}
