//! In-memory backend for the Dispensary store.
//!
//! Both collections sit behind one [`tokio::sync::RwLock`], so every write
//! is a single critical section and the service can run on a multi-threaded
//! runtime. Nothing survives the process.

mod seed;
mod store;

pub use seed::SEED_CATEGORIES;
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
