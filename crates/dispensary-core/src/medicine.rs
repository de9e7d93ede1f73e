//! Medicine records, the raw inputs accepted from callers, and the validated
//! values a store consumes.
//!
//! Raw inputs (`*Input`) are what arrives over the wire. They only become
//! [`NewMedicine`] or [`MedicinePatch`] after passing through
//! [`crate::validate`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ─── Record ──────────────────────────────────────────────────────────────────

/// A stored medicine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
  pub id:             Uuid,
  /// Trimmed and title-cased.
  pub name:           String,
  /// Trimmed and lower-cased. Matches category names by string, not by id.
  pub category:       String,
  pub dosage:         String,
  /// Trimmed and title-cased.
  pub manufacturer:   String,
  pub expiry_date:    NaiveDate,
  pub stock_quantity: u64,
  pub price:          Option<f64>,
  pub description:    Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at:     DateTime<Utc>,
  pub updated_at:     DateTime<Utc>,
}

impl Medicine {
  /// A medicine expiring today already counts as expired.
  pub fn is_expired(&self, today: NaiveDate) -> bool {
    self.expiry_date <= today
  }

  /// Case-insensitive comparison against a category name.
  pub fn belongs_to(&self, category: &str) -> bool {
    self.category.to_lowercase() == category.to_lowercase()
  }

  /// Whether `needle` (already lower-cased) occurs in the name or the
  /// manufacturer.
  pub fn mentions(&self, needle: &str) -> bool {
    self.name.to_lowercase().contains(needle)
      || self.manufacturer.to_lowercase().contains(needle)
  }
}

// ─── Validated values ────────────────────────────────────────────────────────

/// Input to [`crate::store::InventoryStore::create_medicine`].
/// `id` and both timestamps are always set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicine {
  pub name:           String,
  pub category:       String,
  pub dosage:         String,
  pub manufacturer:   String,
  pub expiry_date:    NaiveDate,
  pub stock_quantity: u64,
  pub price:          Option<f64>,
  pub description:    Option<String>,
}

/// A validated partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicinePatch {
  pub name:           Option<String>,
  pub category:       Option<String>,
  pub dosage:         Option<String>,
  pub manufacturer:   Option<String>,
  pub expiry_date:    Option<NaiveDate>,
  pub stock_quantity: Option<u64>,
  /// `Some(None)` clears the stored price.
  pub price:          Option<Option<f64>>,
  /// `Some(None)` clears the stored description.
  pub description:    Option<Option<String>>,
}

impl MedicinePatch {
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Merge the supplied fields onto `medicine`. Timestamps are the caller's
  /// responsibility.
  pub fn apply_to(self, medicine: &mut Medicine) {
    if let Some(name) = self.name {
      medicine.name = name;
    }
    if let Some(category) = self.category {
      medicine.category = category;
    }
    if let Some(dosage) = self.dosage {
      medicine.dosage = dosage;
    }
    if let Some(manufacturer) = self.manufacturer {
      medicine.manufacturer = manufacturer;
    }
    if let Some(expiry_date) = self.expiry_date {
      medicine.expiry_date = expiry_date;
    }
    if let Some(stock_quantity) = self.stock_quantity {
      medicine.stock_quantity = stock_quantity;
    }
    if let Some(price) = self.price {
      medicine.price = price;
    }
    if let Some(description) = self.description {
      medicine.description = description;
    }
  }
}

// ─── Raw inputs ──────────────────────────────────────────────────────────────

/// JSON body accepted when creating a medicine.
#[derive(Debug, Clone, Deserialize)]
pub struct MedicineInput {
  pub name:           String,
  pub category:       String,
  pub dosage:         String,
  pub manufacturer:   String,
  pub expiry_date:    NaiveDate,
  /// Signed so that a negative quantity reaches validation instead of
  /// failing deserialisation.
  pub stock_quantity: i64,
  pub price:          Option<f64>,
  pub description:    Option<String>,
}

/// JSON body accepted when updating a medicine. Every field is optional.
///
/// For `price` and `description` an explicit `null` is distinct from an
/// absent key: `null` clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicinePatchInput {
  pub name:           Option<String>,
  pub category:       Option<String>,
  pub dosage:         Option<String>,
  pub manufacturer:   Option<String>,
  pub expiry_date:    Option<NaiveDate>,
  pub stock_quantity: Option<i64>,
  #[serde(default, deserialize_with = "present")]
  pub price:          Option<Option<f64>>,
  #[serde(default, deserialize_with = "present")]
  pub description:    Option<Option<String>>,
}

/// Marks a key as present even when its value is `null`; `#[serde(default)]`
/// covers the absent case.
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(de).map(Some)
}
