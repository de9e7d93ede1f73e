//! Handler for `GET /health`.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: DateTime<Utc>,
  pub service:   &'static str,
}

/// `GET /health`: always 200 while the process is serving.
pub async fn handler() -> Json<Health> {
  Json(Health {
    status:    "healthy",
    timestamp: Utc::now(),
    service:   "Medicine Management System API",
  })
}
