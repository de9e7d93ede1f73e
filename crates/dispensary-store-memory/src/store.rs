//! [`MemoryStore`], the in-memory implementation of [`InventoryStore`].

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Local, NaiveDate, TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use dispensary_core::{
  Error, Result,
  category::{Category, NewCategory},
  medicine::{Medicine, MedicinePatch, NewMedicine},
  store::{InventoryStore, MedicineQuery},
};

use crate::seed::SEED_CATEGORIES;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Dispensary store held entirely in process memory.
///
/// Cloning is cheap; clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Collections>>,
}

#[derive(Default)]
struct Collections {
  medicines:  HashMap<Uuid, Medicine>,
  categories: HashMap<Uuid, Category>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store preloaded with [`SEED_CATEGORIES`].
  pub fn seeded() -> Self {
    let now = Utc::now();
    let categories = SEED_CATEGORIES
      .iter()
      .map(|(name, description)| {
        let category = Category {
          id:          Uuid::new_v4(),
          name:        (*name).to_owned(),
          description: Some((*description).to_owned()),
          created_at:  now,
          updated_at:  now,
        };
        (category.id, category)
      })
      .collect();

    Self {
      inner: Arc::new(RwLock::new(Collections {
        medicines: HashMap::new(),
        categories,
      })),
    }
  }
}

/// The local calendar date, which is what expiry dates are compared against.
fn today() -> NaiveDate { Local::now().date_naive() }

/// A timestamp strictly later than `previous`, even if the clock has not
/// advanced since.
fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
  let now = Utc::now();
  if now > previous {
    now
  } else {
    previous + TimeDelta::microseconds(1)
  }
}

// ─── InventoryStore impl ─────────────────────────────────────────────────────

impl InventoryStore for MemoryStore {
  // ── Medicines ─────────────────────────────────────────────────────────────

  async fn create_medicine(&self, input: NewMedicine) -> Result<Medicine> {
    let now = Utc::now();
    let medicine = Medicine {
      id:             Uuid::new_v4(),
      name:           input.name,
      category:       input.category,
      dosage:         input.dosage,
      manufacturer:   input.manufacturer,
      expiry_date:    input.expiry_date,
      stock_quantity: input.stock_quantity,
      price:          input.price,
      description:    input.description,
      created_at:     now,
      updated_at:     now,
    };

    self
      .inner
      .write()
      .await
      .medicines
      .insert(medicine.id, medicine.clone());

    Ok(medicine)
  }

  async fn get_medicine(&self, id: Uuid) -> Result<Option<Medicine>> {
    Ok(self.inner.read().await.medicines.get(&id).cloned())
  }

  async fn update_medicine(
    &self,
    id: Uuid,
    patch: MedicinePatch,
  ) -> Result<Option<Medicine>> {
    let mut inner = self.inner.write().await;
    let Some(medicine) = inner.medicines.get_mut(&id) else {
      return Ok(None);
    };

    if patch.is_empty() {
      return Ok(Some(medicine.clone()));
    }

    patch.apply_to(medicine);
    medicine.updated_at = later_than(medicine.updated_at);

    Ok(Some(medicine.clone()))
  }

  async fn delete_medicine(&self, id: Uuid) -> Result<bool> {
    Ok(self.inner.write().await.medicines.remove(&id).is_some())
  }

  async fn list_medicines<'a>(
    &'a self,
    query: &'a MedicineQuery,
  ) -> Result<Vec<Medicine>> {
    let today = today();
    let inner = self.inner.read().await;

    let mut hits: Vec<&Medicine> = inner
      .medicines
      .values()
      .filter(|m| query.matches(m, today))
      .collect();

    // Creation order breaks name ties so pages are stable between calls.
    hits.sort_by(|a, b| {
      a.name
        .cmp(&b.name)
        .then(a.created_at.cmp(&b.created_at))
        .then(a.id.cmp(&b.id))
    });

    Ok(
      hits
        .into_iter()
        .skip(query.skip)
        .take(query.limit)
        .cloned()
        .collect(),
    )
  }

  // ── Categories ────────────────────────────────────────────────────────────

  async fn create_category(&self, input: NewCategory) -> Result<Category> {
    let mut inner = self.inner.write().await;

    let wanted = input.name.to_lowercase();
    if inner
      .categories
      .values()
      .any(|c| c.name.to_lowercase() == wanted)
    {
      return Err(Error::DuplicateCategory(input.name));
    }

    let now = Utc::now();
    let category = Category {
      id:          Uuid::new_v4(),
      name:        input.name,
      description: input.description,
      created_at:  now,
      updated_at:  now,
    };
    inner.categories.insert(category.id, category.clone());

    Ok(category)
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let mut categories: Vec<Category> =
      self.inner.read().await.categories.values().cloned().collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(categories)
  }

  async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
    Ok(self.inner.read().await.categories.get(&id).cloned())
  }

  async fn delete_category(&self, id: Uuid) -> Result<bool> {
    let mut inner = self.inner.write().await;
    let Some(name) = inner.categories.get(&id).map(|c| c.name.clone()) else {
      return Ok(false);
    };

    let count = inner
      .medicines
      .values()
      .filter(|m| m.belongs_to(&name))
      .count();
    if count > 0 {
      return Err(Error::CategoryInUse { name, count });
    }

    inner.categories.remove(&id);
    Ok(true)
  }
}
