//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use dispensary_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Store(#[from] dispensary_core::Error),
}

impl From<ValidationError> for ApiError {
  fn from(e: ValidationError) -> Self {
    ApiError::Store(e.into())
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    use dispensary_core::Error as Core;
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_)
      | ApiError::Store(
        Core::Validation(_)
        | Core::DuplicateCategory(_)
        | Core::CategoryInUse { .. },
      ) => StatusCode::BAD_REQUEST,
      ApiError::Store(Core::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      ApiError::NotFound(m) | ApiError::BadRequest(m) => m.clone(),
      ApiError::Store(e) if status.is_server_error() => {
        tracing::error!(error = %e, "unexpected store failure");
        format!("internal error: {e}")
      }
      ApiError::Store(e) => e.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
