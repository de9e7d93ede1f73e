//! Core types and trait definitions for the Dispensary inventory service.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! Validation lives here so every backend receives already-normalised input.

pub mod category;
pub mod error;
pub mod medicine;
pub mod store;
pub mod validate;

pub use error::{Error, Result, ValidationError};
