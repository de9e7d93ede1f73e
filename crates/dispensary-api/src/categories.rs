//! Handlers for `/categories` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/categories` | Sorted by name |
//! | `POST`   | `/categories` | Body: `{"name":"...","description":"..."}`; 400 on a duplicate name |
//! | `GET`    | `/categories/:id` | 404 if not found |
//! | `DELETE` | `/categories/:id` | 400 while medicines still use it |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use dispensary_core::{
  category::{Category, CategoryInput},
  store::InventoryStore,
  validate,
};

use crate::{
  error::ApiError,
  extract::{Payload, Segment, record_id},
  record::{self, Stored},
};

fn not_found(id: &str) -> ApiError {
  ApiError::NotFound(format!("category with id {id} not found"))
}

/// `GET /categories`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Stored<Category>>>, ApiError>
where
  S: InventoryStore,
{
  let categories = store.list_categories().await?;
  Ok(Json(record::all(categories)))
}

/// `POST /categories`: returns 201 + the stored [`Category`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<CategoryInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InventoryStore,
{
  let input = validate::category(body)?;
  let category = store.create_category(input).await?;
  tracing::info!(id = %category.id, name = %category.name, "category created");
  Ok((StatusCode::CREATED, Json(Stored::from(category))))
}

/// `GET /categories/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Segment(raw): Segment<String>,
) -> Result<Json<Stored<Category>>, ApiError>
where
  S: InventoryStore,
{
  let id = record_id(&raw).ok_or_else(|| not_found(&raw))?;
  let category = store.get_category(id).await?.ok_or_else(|| not_found(&raw))?;
  Ok(Json(Stored::from(category)))
}

/// `DELETE /categories/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Segment(raw): Segment<String>,
) -> Result<StatusCode, ApiError>
where
  S: InventoryStore,
{
  let id = record_id(&raw).ok_or_else(|| not_found(&raw))?;
  if !store.delete_category(id).await? {
    return Err(not_found(&raw));
  }
  tracing::info!(%id, "category deleted");
  Ok(StatusCode::NO_CONTENT)
}
