//! Core domain model for cancionero.
//!
//! This crate defines the song record model, the read-only in-memory
//! catalog store, and the mood/feature taxonomy used by the query engine.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod taxonomy;

pub use catalog::{CatalogStore, Column, Projection};
pub use error::{Error, ErrorKind, Result};
