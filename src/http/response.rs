//! HTML responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// A rendered page with its status code.
#[derive(Debug)]
pub struct Page {
    status: StatusCode,
    html: String,
}

impl Page {
    pub fn ok(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            html,
        }
    }

    /// A form re-displayed because its submission failed validation.
    pub fn rejected(html: String) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            html,
        }
    }

    pub fn not_found(html: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            html,
        }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}
