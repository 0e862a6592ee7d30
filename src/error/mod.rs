use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::urls::UrlError;

/// Everything that can go wrong while fetching a page. The `Display` text is
/// shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Page not found (404). Please check the URL.")]
    NotFound,

    #[error("Access forbidden (403). The site may be blocking automated requests.")]
    Forbidden,

    #[error("Server error. The website appears to be down.")]
    ServerError,

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("URL does not point to an HTML page. Please enter a valid webpage URL.")]
    NotHtml,

    #[error("The webpage appears to be empty or could not be loaded.")]
    EmptyPage,

    #[error("Network error. Please check your internet connection and try again.")]
    Network,

    #[error("Request timed out. The website is taking too long to respond.")]
    Timeout,

    #[error("An unexpected error occurred while fetching the webpage.")]
    Unexpected,
}

impl FetchError {
    /// Classify a non-2xx status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FetchError::NotFound,
            403 => FetchError::Forbidden,
            s if s >= 500 => FetchError::ServerError,
            s => FetchError::HttpStatus {
                status: s,
                reason: StatusCode::from_u16(s)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or_default()
                    .to_string(),
            },
        }
    }
}

/// Timeouts are checked first: reqwest may flag a slow connect as both.
/// Refused, reset and prematurely closed connections all count as network
/// failures.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() || e.is_request() {
            FetchError::Network
        } else {
            FetchError::Unexpected
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl From<UrlError> for AppError {
    fn from(e: UrlError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Fetch(e) => {
                tracing::warn!(error = %e, "Metadata fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
