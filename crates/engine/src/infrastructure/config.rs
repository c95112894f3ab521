//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// Landing page template
    pub index_template: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Title substituted into the landing page
    pub title: String,

    /// CORS allowed origins (comma-separated, or "*" for any). No CORS layer when unset.
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "8080".to_string());

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: server_port
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got {server_port:?}"))?,

            index_template: lookup("STORYWEB_INDEX_TEMPLATE")
                .unwrap_or_else(|| "web/index.html".to_string())
                .into(),
            static_dir: lookup("STORYWEB_STATIC_DIR")
                .unwrap_or_else(|| "web/static".to_string())
                .into(),
            title: lookup("STORYWEB_TITLE").unwrap_or_else(|| "Colony Collapse".to_string()),

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// CORS layer for the configured origins, or `None` when CORS is off or
    /// no origin in the list is a valid header value.
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        let allowed_origins = self.cors_allowed_origins.as_deref()?;

        // htmx issues plain GETs with its own request headers.
        let mut cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any);

        if allowed_origins == "*" {
            cors = cors.allow_origin(Any);
        } else {
            let origins: Vec<HeaderValue> = allowed_origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| HeaderValue::from_str(s).ok())
                .collect();

            if origins.is_empty() {
                return None;
            }

            cors = cors.allow_origin(origins);
        }

        Some(cors)
    }
}
