//! HTTP server wiring for threadref.
//!
//! Owns configuration and assembles the API router around a fresh in-memory
//! session. Nothing outlives the process.

use std::path::Path;

use axum::Router;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use threadref_core::session::Session;
use threadref_store_memory::MemoryStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `THREADREF_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8088 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
    }
  }
}

impl ServerConfig {
  /// Read `path` if it exists, then apply environment overrides.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("THREADREF")),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder.build()?.try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the application router: the JSON API under `/api`, with HTTP
/// request tracing.
pub fn app() -> Router {
  let session = threadref_api::shared(Session::new(MemoryStore::new()));
  Router::new()
    .nest("/api", threadref_api::api_router(session))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use config::FileFormat;
  use tower::ServiceExt as _;

  #[test]
  fn config_defaults_apply_when_keys_missing() {
    let cfg = ServerConfig::from_builder(Config::builder()).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "127.0.0.1:8088");
  }

  #[test]
  fn config_file_overrides_defaults() {
    let builder = Config::builder()
      .add_source(File::from_str("host = \"0.0.0.0\"\nport = 9000", FileFormat::Toml));
    let cfg = ServerConfig::from_builder(builder).unwrap();
    assert_eq!(cfg.address(), "0.0.0.0:9000");
  }

  #[test]
  fn missing_config_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/threadref.toml"));
    assert!(cfg.is_ok());
  }

  #[tokio::test]
  async fn app_serves_api_under_prefix() {
    let req = Request::builder()
      .uri("/api/stats")
      .body(Body::empty())
      .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stats["total_messages"], 0);
    assert!(stats["next_reference"].as_str().unwrap().ends_with("-0001"));
  }
}
