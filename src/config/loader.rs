//! Load `AppConfig` from environment variables (`BLOG_API_*`).

use crate::config::types::*;
use crate::error::ConfigError;
use axum::http::HeaderValue;

pub const ENV_HOST: &str = "BLOG_API_HOST";
pub const ENV_PORT: &str = "BLOG_API_PORT";
pub const ENV_BASE_PATH: &str = "BLOG_API_BASE_PATH";
pub const ENV_CORS_ORIGIN: &str = "BLOG_API_CORS_ORIGIN";
pub const ENV_BODY_LIMIT: &str = "BLOG_API_BODY_LIMIT";

impl AppConfig {
    /// Read from the process environment. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let host = lookup(ENV_HOST).unwrap_or(defaults.host);
        let port = match lookup(ENV_PORT) {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::InvalidPort(s))?,
            None => defaults.port,
        };
        let base_path = match lookup(ENV_BASE_PATH) {
            Some(s) => parse_base_path(&s)?,
            None => defaults.base_path,
        };
        let cors_origin = match lookup(ENV_CORS_ORIGIN) {
            Some(s) => {
                HeaderValue::from_str(s.trim()).map_err(|_| ConfigError::InvalidOrigin(s))?
            }
            None => defaults.cors_origin,
        };
        let body_limit = match lookup(ENV_BODY_LIMIT) {
            Some(s) => match s.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidBodyLimit(s)),
            },
            None => defaults.body_limit,
        };

        Ok(Self {
            host,
            port,
            base_path,
            cors_origin,
            body_limit,
        })
    }
}

/// `/` and the empty string both mean "no prefix".
fn parse_base_path(raw: &str) -> Result<String, ConfigError> {
    let s = raw.trim();
    if s.is_empty() || s == "/" {
        return Ok(String::new());
    }
    if !s.starts_with('/') || s.ends_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    Ok(s.to_string())
}
