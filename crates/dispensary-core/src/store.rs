//! The `InventoryStore` trait and the medicine listing query.
//!
//! The trait is implemented by storage backends (e.g.
//! `dispensary-store-memory`). The HTTP layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  Result,
  category::{Category, NewCategory},
  medicine::{Medicine, MedicinePatch, NewMedicine},
};

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 1000;

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`InventoryStore::list_medicines`].
///
/// Filters combine with AND; a `None` filter imposes no constraint. Results
/// are ordered by name before the `skip`/`limit` window is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineQuery {
  pub skip:     usize,
  pub limit:    usize,
  /// Case-insensitive equality against the medicine's category.
  pub category: Option<String>,
  /// Case-insensitive substring of the name or the manufacturer.
  pub search:   Option<String>,
  /// `Some(true)` keeps only expired medicines, `Some(false)` only
  /// unexpired ones.
  pub expired:  Option<bool>,
}

impl Default for MedicineQuery {
  fn default() -> Self {
    Self {
      skip:     0,
      limit:    DEFAULT_LIMIT,
      category: None,
      search:   None,
      expired:  None,
    }
  }
}

impl MedicineQuery {
  /// Whether `medicine` passes every filter. Empty `category` and `search`
  /// strings count as absent.
  pub fn matches(&self, medicine: &Medicine, today: NaiveDate) -> bool {
    if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty())
      && !medicine.belongs_to(category)
    {
      return false;
    }
    if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty())
      && !medicine.mentions(&search.to_lowercase())
    {
      return false;
    }
    if let Some(expired) = self.expired
      && medicine.is_expired(today) != expired
    {
      return false;
    }
    true
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Dispensary store backend.
///
/// Inputs are already validated; backends only enforce the cross-record
/// rules (category uniqueness and referential integrity). Lookups that miss
/// return `None` or `false` rather than an error.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait InventoryStore: Send + Sync {
  // ── Medicines ─────────────────────────────────────────────────────────

  /// Persist a new medicine. The store assigns `id`, `created_at` and
  /// `updated_at`. Duplicate names are allowed.
  fn create_medicine(
    &self,
    input: NewMedicine,
  ) -> impl Future<Output = Result<Medicine>> + Send + '_;

  fn get_medicine(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Medicine>>> + Send + '_;

  /// Merge `patch` onto an existing medicine.
  ///
  /// Returns `None` if the medicine does not exist. An empty patch returns
  /// the record unchanged, without touching `updated_at`.
  fn update_medicine(
    &self,
    id: Uuid,
    patch: MedicinePatch,
  ) -> impl Future<Output = Result<Option<Medicine>>> + Send + '_;

  /// Returns `true` if a medicine was removed.
  fn delete_medicine(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  /// Filter, sort by name, then window with `skip`/`limit`.
  fn list_medicines<'a>(
    &'a self,
    query: &'a MedicineQuery,
  ) -> impl Future<Output = Result<Vec<Medicine>>> + Send + 'a;

  // ── Categories ────────────────────────────────────────────────────────

  /// Persist a new category.
  ///
  /// Fails with [`crate::Error::DuplicateCategory`] if the name is already
  /// taken, compared case-insensitively.
  fn create_category(
    &self,
    input: NewCategory,
  ) -> impl Future<Output = Result<Category>> + Send + '_;

  /// All categories, sorted by name.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>>> + Send + '_;

  fn get_category(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Category>>> + Send + '_;

  /// Remove a category that no medicine refers to.
  ///
  /// Returns `false` if it does not exist, or fails with
  /// [`crate::Error::CategoryInUse`] while medicines still name it.
  fn delete_category(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool>> + Send + '_;
}
