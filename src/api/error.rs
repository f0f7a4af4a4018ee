use crate::error::TicketDeskError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");
const SERVER_ERROR_PAGE: &str = include_str!("../../templates/errors/500.html");

impl IntoResponse for TicketDeskError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound { .. } => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            other => {
                error!("Request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            },
        }
    }
}
