//! Error handling for the VaanMozhi alert relay
//!
//! Every failure leaves a handler as the same `{error, details}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authorization errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Location not found: {}", .message.as_deref().unwrap_or("no details from upstream"))]
    LocationNotFound { message: Option<String> },

    #[error("District not found: {0}")]
    DistrictNotFound(String),

    // Upstream errors
    #[error("Unexpected weather API response: {0}")]
    UpstreamParse(String),

    #[error("Weather API request failed: {0}")]
    Upstream(String),

    // Handler errors
    #[error("Batch processing failed: {0}")]
    BatchProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::LocationNotFound { .. } | AppError::DistrictNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::UpstreamParse(_)
            | AppError::Upstream(_)
            | AppError::BatchProcessing(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope for this error
    pub fn to_response_body(&self) -> ErrorResponse {
        let (error, details) = match self {
            AppError::Unauthorized(msg) => ("Unauthorized", Some(msg.clone())),
            AppError::BadRequest(msg) => ("Bad Request", Some(msg.clone())),
            AppError::LocationNotFound { message } => ("Location not found", message.clone()),
            AppError::DistrictNotFound(name) => (
                "District not found",
                Some(format!("{} is not a monitored district", name)),
            ),
            AppError::UpstreamParse(msg) | AppError::Upstream(msg) | AppError::Internal(msg) => {
                ("Inference Engine Error", Some(msg.clone()))
            }
            AppError::BatchProcessing(msg) => ("Batch Processing Error", Some(msg.clone())),
            AppError::Configuration(msg) => ("Configuration error", Some(msg.clone())),
        };

        ErrorResponse {
            error: error.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
