//! Categories a fresh service starts with.

/// `(name, description)` pairs loaded by [`crate::MemoryStore::seeded`].
pub const SEED_CATEGORIES: &[(&str, &str)] = &[
  ("antibiotics", "Antibiotic medications"),
  ("antipyretics", "reduce fever"),
  ("painkillers", "Pain relief medications"),
  ("vitamins", "Vitamin supplements"),
  ("antacids", "Stomach acid relief"),
];
