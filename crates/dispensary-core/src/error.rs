//! Error types for `dispensary-core`.

use thiserror::Error;

/// A single field failed its validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{field} cannot be empty or contain only whitespace")]
  Blank { field: &'static str },

  #[error("category cannot be empty")]
  EmptyCategory,

  #[error("dosage cannot be empty")]
  EmptyDosage,

  #[error("category name cannot be empty")]
  EmptyCategoryName,

  #[error("expiry date must be in the future")]
  ExpiryNotInFuture,

  #[error("stock quantity cannot be negative")]
  NegativeStock,

  #[error("price cannot be negative")]
  NegativePrice,

  #[error("{field} is too long (at most {max} characters)")]
  TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("category '{0}' already exists")]
  DuplicateCategory(String),

  #[error(
    "cannot delete category '{name}' because it is used by {count} medicine(s)"
  )]
  CategoryInUse { name: String, count: usize },

  /// Anything a backend did not anticipate.
  #[error("store error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
