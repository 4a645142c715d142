mod blog;
mod common;
mod docs;

pub use blog::blog_routes;
pub use common::common_routes;
pub use docs::{docs_routes, openapi, ApiDoc};
