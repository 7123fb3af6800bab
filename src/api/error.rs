use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use crate::errors::YouTubeError;
use maud::Markup;
use serde_json::json;
use super::pages;
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    YouTubeError(YouTubeError),
    InvalidRequest(String),
}

impl From<YouTubeError> for ApiError {
    fn from(err: YouTubeError) -> Self {
        ApiError::YouTubeError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::YouTubeError(err) => {
                let (status, error_code, message) = match &err {
                    YouTubeError::NotFound => (StatusCode::NOT_FOUND, "not_found", "Not found"),
                    YouTubeError::Ratelimited => (StatusCode::TOO_MANY_REQUESTS, "rate_limited", "Rate limited"),
                    YouTubeError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized"),
                    YouTubeError::Forbidden => (StatusCode::FORBIDDEN, "forbidden", "Forbidden"),
                    YouTubeError::CommentsDisabled => (StatusCode::FORBIDDEN, "comments_disabled", "Comments are disabled"),
                    YouTubeError::BadRequest(_) => (StatusCode::BAD_GATEWAY, "upstream_bad_request", "The video API rejected the request"),
                    YouTubeError::InternalServerError => (StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error", "Internal server error"),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "unknown_error", "Unknown error occurred"),
                };

                if status.is_server_error() {
                    error!(error = %err, "data api request failed");
                } else {
                    warn!(error = %err, "data api request rejected");
                }

                (status, Json(json!({
                    "error": error_code,
                    "message": message
                }))).into_response()
            },
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({
                    "error": "invalid_request",
                    "message": msg
                }))).into_response()
            }
        }
    }
}

/// Rejections on the HTML routes, answered with a page instead of JSON.
#[derive(Debug)]
pub enum PageError {
    InvalidRequest(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::InvalidRequest(msg) => {
                warn!(message = %msg, "page request rejected");
                let page: Markup = pages::render_error(&msg);
                (StatusCode::BAD_REQUEST, page).into_response()
            }
        }
    }
}
