//! HTTP server wiring for Dispensary.
//!
//! Loads [`ServerConfig`], builds the in-memory store, and mounts the JSON
//! API under `/api`.

use std::{path::Path, sync::Arc};

use axum::Router;
use dispensary_core::store::InventoryStore;
use dispensary_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Preload the standard categories at startup.
  pub seed_categories: bool,
}

impl ServerConfig {
  /// Built-in defaults, overlaid by the TOML file at `path` if it exists,
  /// overlaid by `DISPENSARY_*` environment variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("seed_categories", true)?
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("DISPENSARY").try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// The store the process serves from; lives until shutdown.
pub fn build_store(config: &ServerConfig) -> MemoryStore {
  if config.seed_categories {
    MemoryStore::seeded()
  } else {
    MemoryStore::new()
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router with request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: InventoryStore + 'static,
{
  Router::new()
    .nest("/api", dispensary_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
