//! Blog CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::{BlogPost, BlogSummary, CreateBlogRequest, UpdateBlogRequest};
use crate::response::{created, no_content, ok, ErrorBody};
use crate::service::BlogService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a JSON object body into `T`. The error carries a detail for logging.
fn parse_body<T: DeserializeOwned>(body: Result<Json<Value>, JsonRejection>) -> Result<T, String> {
    let Json(value) = body.map_err(|e| e.body_text())?;
    if !value.is_object() {
        return Err("body must be a JSON object".into());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blogs",
    responses(
        (status = 200, description = "All blogs, without content", body = Vec<BlogSummary>)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = BlogService::list(&state.store)?;
    Ok(ok(rows))
}

#[utoipa::path(
    post,
    path = "/blogs",
    tag = "blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogPost),
        (
            status = 400,
            description = "title, content or userName blank, or body malformed",
            body = ErrorBody
        )
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req: CreateBlogRequest = parse_body(body).map_err(|detail| {
        tracing::debug!(%detail, "create body rejected");
        AppError::invalid_params()
    })?;
    let row = BlogService::create(&state.store, req)?;
    Ok(created(row))
}

#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Id of the blog to fetch")),
    responses(
        (status = 200, description = "The blog with this id", body = BlogPost),
        (status = 404, description = "No blog with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = BlogService::read(&state.store, &id)?;
    Ok(ok(row))
}

#[utoipa::path(
    put,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Id of the blog to update")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogPost),
        (status = 404, description = "No blog with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // An unreadable body changes nothing; the only update failure is an unknown id.
    let req: UpdateBlogRequest = parse_body(body).unwrap_or_else(|detail| {
        tracing::debug!(%detail, "update body ignored");
        UpdateBlogRequest::default()
    });
    let row = BlogService::update(&state.store, &id, req)?;
    Ok(ok(row))
}

#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Id of the blog to delete")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 404, description = "No blog with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BlogService::delete(&state.store, &id)?;
    Ok(no_content())
}
