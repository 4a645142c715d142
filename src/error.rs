//! Typed errors and HTTP mapping.

use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message carried by every rejected create request.
pub const INVALID_PARAMS: &str = "parameters are invalid";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid base path '{0}': must start with '/' and not end with '/'")]
    InvalidBasePath(String),
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
    #[error("invalid body limit: {0}")]
    InvalidBodyLimit(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_params() -> Self {
        AppError::Validation(INVALID_PARAMS.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
