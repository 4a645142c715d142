//! Blog CRUD routes, nested under `{base_path}/blogs` by the caller.

use crate::handlers::blog::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
