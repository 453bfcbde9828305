//! The read-only in-memory song catalog.
//!
//! A [`CatalogStore`] is loaded once (from a CSV export or from in-memory
//! records) and never mutated afterwards, so it can be shared across
//! threads without synchronization.

pub mod columns;
mod load;
pub mod store;

pub use columns::Column;
pub use store::{CatalogStore, Projection};
