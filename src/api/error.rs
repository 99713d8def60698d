//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.
//!
//! Every error body has the shape `{"error": "<message>"}`. Provider
//! failures are logged with full detail but reach the client only as the
//! generic message supplied by the handler.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Header carrying the id that correlates a failed response with its log line
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found; the message is shown to the client verbatim
    #[error("{0}")]
    NotFound(String),

    /// The indicator provider failed
    #[error("{message}: {source}")]
    Provider {
        message: String,
        #[source]
        source: StoreError,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Wrap a provider failure with the message the client should see
    pub fn provider(message: impl Into<String>, source: StoreError) -> Self {
        ApiError::Provider {
            message: message.into(),
            source,
        }
    }

    /// HTTP status and machine-readable code for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Provider { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message safe to return to the client
    pub fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Provider { message, .. } => message.clone(),
            ApiError::Internal(_) | ApiError::Io(_) => "Internal server error".to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API request rejected"
            );
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };

        let mut response = (status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
