//! Handlers for `/medicines` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/medicines` | Optional `skip`, `limit`, `category`, `search`, `expired` |
//! | `POST`   | `/medicines` | Body: [`MedicineInput`]; returns 201 + stored medicine |
//! | `GET`    | `/medicines/:id` | 404 if not found |
//! | `PUT`    | `/medicines/:id` | Body: [`MedicinePatchInput`]; only supplied fields change |
//! | `DELETE` | `/medicines/:id` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use dispensary_core::{
  medicine::{Medicine, MedicineInput, MedicinePatchInput},
  store::{DEFAULT_LIMIT, InventoryStore, MAX_LIMIT, MedicineQuery},
  validate,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{Params, Payload, Segment, record_id},
  record::{self, Stored},
  today,
};

fn not_found(id: &str) -> ApiError {
  ApiError::NotFound(format!("medicine with id {id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Number of records to skip. Default 0.
  pub skip:     Option<usize>,
  /// Number of records to return, 1 to 1000. Default 100.
  pub limit:    Option<usize>,
  pub category: Option<String>,
  /// Matched against the name or the manufacturer.
  pub search:   Option<String>,
  /// `true` for expired medicines, `false` for unexpired ones.
  pub expired:  Option<bool>,
}

impl TryFrom<ListParams> for MedicineQuery {
  type Error = ApiError;

  fn try_from(params: ListParams) -> Result<Self, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
      return Err(ApiError::BadRequest(format!(
        "limit must be between 1 and {MAX_LIMIT}"
      )));
    }
    Ok(MedicineQuery {
      skip: params.skip.unwrap_or(0),
      limit,
      category: params.category,
      search: params.search,
      expired: params.expired,
    })
  }
}

/// `GET /medicines[?skip=..][&limit=..][&category=..][&search=..][&expired=..]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Params(params): Params<ListParams>,
) -> Result<Json<Vec<Stored<Medicine>>>, ApiError>
where
  S: InventoryStore,
{
  let query = MedicineQuery::try_from(params)?;
  let medicines = store.list_medicines(&query).await?;
  Ok(Json(record::all(medicines)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /medicines`: returns 201 + the stored [`Medicine`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Payload(body): Payload<MedicineInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InventoryStore,
{
  let input = validate::medicine(body, today())?;
  let medicine = store.create_medicine(input).await?;
  tracing::info!(id = %medicine.id, name = %medicine.name, "medicine created");
  Ok((StatusCode::CREATED, Json(Stored::from(medicine))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /medicines/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Segment(raw): Segment<String>,
) -> Result<Json<Stored<Medicine>>, ApiError>
where
  S: InventoryStore,
{
  let id = record_id(&raw).ok_or_else(|| not_found(&raw))?;
  let medicine = store.get_medicine(id).await?.ok_or_else(|| not_found(&raw))?;
  Ok(Json(Stored::from(medicine)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /medicines/:id`, body: any subset of the medicine fields.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Segment(raw): Segment<String>,
  Payload(body): Payload<MedicinePatchInput>,
) -> Result<Json<Stored<Medicine>>, ApiError>
where
  S: InventoryStore,
{
  let id = record_id(&raw).ok_or_else(|| not_found(&raw))?;
  let patch = validate::medicine_patch(body, today())?;
  let medicine = store
    .update_medicine(id, patch)
    .await?
    .ok_or_else(|| not_found(&raw))?;
  tracing::info!(%id, "medicine updated");
  Ok(Json(Stored::from(medicine)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /medicines/:id`: 204 with an empty body.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Segment(raw): Segment<String>,
) -> Result<StatusCode, ApiError>
where
  S: InventoryStore,
{
  let id = record_id(&raw).ok_or_else(|| not_found(&raw))?;
  if !store.delete_medicine(id).await? {
    return Err(not_found(&raw));
  }
  tracing::info!(%id, "medicine deleted");
  Ok(StatusCode::NO_CONTENT)
}
