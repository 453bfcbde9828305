//! Query engine for cancionero.
//!
//! Implements song search, popularity ranking, mood and feature filters,
//! and cluster-partitioned nearest-neighbor recommendations on top of an
//! immutable in-memory catalog, plus the request boundary transports call.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod engine;
pub mod request;

pub use config::{Config, Limits, LoggingConfig};
pub use engine::{CatalogSummary, QueryEngine};
pub use request::{Request, Response};
