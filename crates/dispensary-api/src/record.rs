//! Response wrapper that repeats a record's identifier under `_id`.

use dispensary_core::{category::Category, medicine::Medicine};
use serde::Serialize;
use uuid::Uuid;

/// A record as it goes over the wire: every field of `T`, plus `_id`.
#[derive(Debug, Serialize)]
pub struct Stored<T> {
  #[serde(rename = "_id")]
  storage_id: Uuid,
  #[serde(flatten)]
  record:     T,
}

impl From<Medicine> for Stored<Medicine> {
  fn from(record: Medicine) -> Self {
    Self {
      storage_id: record.id,
      record,
    }
  }
}

impl From<Category> for Stored<Category> {
  fn from(record: Category) -> Self {
    Self {
      storage_id: record.id,
      record,
    }
  }
}

/// Wrap every record of a listing.
pub fn all<T>(records: Vec<T>) -> Vec<Stored<T>>
where
  Stored<T>: From<T>,
{
  records.into_iter().map(Stored::from).collect()
}
