//! JSON REST API for Dispensary.
//!
//! Exposes an axum [`Router`] backed by any
//! [`dispensary_core::store::InventoryStore`]. Request bodies are validated
//! here, against the local calendar date, before they reach the store.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", dispensary_api::api_router(store.clone()))
//! ```

pub mod categories;
pub mod error;
pub mod extract;
pub mod health;
pub mod medicines;
pub mod record;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{Local, NaiveDate};
use dispensary_core::store::InventoryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: InventoryStore + 'static,
{
  Router::new()
    // Medicines
    .route(
      "/medicines",
      get(medicines::list::<S>).post(medicines::create::<S>),
    )
    .route(
      "/medicines/{id}",
      get(medicines::get_one::<S>)
        .put(medicines::update::<S>)
        .delete(medicines::delete_one::<S>),
    )
    // Categories
    .route(
      "/categories",
      get(categories::list::<S>).post(categories::create::<S>),
    )
    .route(
      "/categories/{id}",
      get(categories::get_one::<S>).delete(categories::delete_one::<S>),
    )
    .route("/health", get(health::handler))
    .with_state(store)
}

/// The date expiry rules are checked against.
pub(crate) fn today() -> NaiveDate { Local::now().date_naive() }
