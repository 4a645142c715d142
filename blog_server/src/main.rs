//! Blog API server.
//!
//! Run from repo root: `cargo run -p blog-server`
//! Configuration comes from `BLOG_API_*` environment variables (or a `.env` file).

use blog_api::{app, AppConfig, AppState, BlogStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("blog_api=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(BlogStore::new());
    let router = app(&config, state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("blog API listening on http://{}{}/blogs", addr, config.base_path);
    tracing::info!("swagger UI at http://{}{}/swagger/ui", addr, config.base_path);
    axum::serve(listener, router).await?;
    Ok(())
}
