//! Response helpers. Bodies are returned bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Shape of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "parameters are invalid")]
    pub error: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
