//! Blog API: JSON CRUD for blog posts over an in-memory store, with OpenAPI docs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{BlogPost, BlogSummary, CreateBlogRequest, UpdateBlogRequest};
pub use routes::{blog_routes, common_routes, docs_routes, openapi};
pub use service::BlogService;
pub use state::AppState;
pub use store::BlogStore;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: common routes at the root, blog CRUD at
/// `{base_path}/blogs`, docs at `{base_path}/swagger/{doc,ui}`.
pub fn app(config: &AppConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(common_routes())
        .nest(&config.route("/blogs"), blog_routes(state))
        .merge(docs_routes(&config.base_path))
        .layer(RequestBodyLimitLayer::new(config.body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
