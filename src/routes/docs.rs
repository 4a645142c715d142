//! OpenAPI document and Swagger UI for the blog routes.

use crate::handlers::blog;
use crate::model::{BlogPost, BlogSummary, CreateBlogRequest, UpdateBlogRequest};
use crate::response::ErrorBody;
use axum::Router;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Blog API", version = "1.0.0", description = "API for managing blog posts"),
    paths(blog::list, blog::create, blog::read, blog::update, blog::delete),
    components(schemas(BlogPost, BlogSummary, CreateBlogRequest, UpdateBlogRequest, ErrorBody)),
    tags((name = "blogs", description = "Blog post CRUD"))
)]
pub struct ApiDoc;

/// OpenAPI document with `base_path` as its only server, so paths resolve to the mounted routes.
pub fn openapi(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let server = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(server)]);
    doc
}

/// GET `{base_path}/swagger/doc` (JSON) and `{base_path}/swagger/ui` (browser).
pub fn docs_routes(base_path: &str) -> Router {
    let ui = SwaggerUi::new(format!("{}/swagger/ui", base_path))
        .url(format!("{}/swagger/doc", base_path), openapi(base_path));
    Router::new().merge(ui)
}
