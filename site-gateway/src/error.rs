use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use taxi_shared::SiteError;
use tracing::error;

const SERVER_ERROR_PAGE: &str = "<!DOCTYPE html><html lang=\"tr\"><head><meta charset=\"utf-8\"><title>500</title></head><body>Site configuration error</body></html>";

/// Failures that end a page request with a server error.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        // 详细信息只写日志，不返回给访客
        error!("Page request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
    }
}
