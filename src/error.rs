//! Error types for the catalog proxy
//!
//! `UpstreamError` covers every way a call to the product API can fail.
//! `ApiError` is the boundary type that turns those failures into a uniform
//! 500 response with a static, endpoint-specific message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure of a single upstream request.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection or protocol failure before a response arrived
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The per-request timeout elapsed
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Upstream answered with a non-2xx status
    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The request URL could not be built
    #[error("invalid upstream url: {message}")]
    InvalidUrl { message: String },
}

impl UpstreamError {
    /// Classifies a reqwest failure for the given URL.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            UpstreamError::Timeout { url }
        } else if let Some(status) = err.status() {
            UpstreamError::Status {
                url,
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            UpstreamError::Decode {
                url,
                message: err.to_string(),
            }
        } else {
            UpstreamError::Transport {
                url,
                message: err.to_string(),
            }
        }
    }
}

// == API Error Enum ==
/// Error surfaced to HTTP callers, one variant per endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to fetch products")]
    Products(#[source] UpstreamError),

    #[error("Failed to fetch product")]
    Product(#[source] UpstreamError),

    #[error("Failed to fetch categories")]
    Categories(#[source] UpstreamError),
}

impl ApiError {
    /// The upstream failure behind this error.
    pub fn upstream(&self) -> &UpstreamError {
        match self {
            ApiError::Products(err) | ApiError::Product(err) | ApiError::Categories(err) => err,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.upstream(), "{}", self);

        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for upstream-facing code.
pub type Result<T> = std::result::Result<T, UpstreamError>;
