//! Server configuration.

use axum::http::HeaderValue;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_PATH: &str = "/api";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every API route, e.g. `/api`. Empty means mounted at root.
    pub base_path: String,
    pub cors_origin: HeaderValue,
    /// Max request body size in bytes.
    pub body_limit: usize,
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `{base_path}{suffix}`, e.g. `route("/blogs")` -> `/api/blogs`.
    pub fn route(&self, suffix: &str) -> String {
        format!("{}{}", self.base_path, suffix)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.into(),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
