//! Medicine categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored category. `name` is lower-cased and unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:          Uuid,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// Input to [`crate::store::InventoryStore::create_category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
  pub name:        String,
  pub description: Option<String>,
}

impl NewCategory {
  /// Build from a name that is already normalised.
  pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
    Self {
      name:        name.into(),
      description: description.map(str::to_owned),
    }
  }
}

/// JSON body accepted when creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
  pub name:        String,
  pub description: Option<String>,
}
