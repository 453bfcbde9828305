//! Stateless query operations over the catalog.
//!
//! Operations are grouped by concern: text search, popularity ranking,
//! mood/feature filters, and recommendations. None of them mutate the
//! catalog; the only shared mutable state is the neighbor-index cache.

mod filter;
mod ranking;
mod recommend;
mod search;

pub use search::MIN_SUGGESTION_QUERY_CHARS;

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use cancionero_core::{CatalogStore, Result};
use cancionero_search::ClusterIndexCache;

use crate::config::{Config, Limits};

/// The recommendation engine. Cheap to share behind an `Arc`; every
/// operation takes `&self`.
#[derive(Debug)]
pub struct QueryEngine {
    catalog: Arc<CatalogStore>,
    indices: ClusterIndexCache,
    reference_year: i32,
    limits: Limits,
}

/// Catalog statistics for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub source: Option<PathBuf>,
    pub songs: usize,
    pub clusters: usize,
    pub indices_built: usize,
}

impl QueryEngine {
    #[must_use]
    pub fn new(catalog: CatalogStore) -> Self {
        let defaults = Config::default();
        let catalog = Arc::new(catalog);
        Self {
            indices: ClusterIndexCache::new(Arc::clone(&catalog)),
            catalog,
            reference_year: defaults.reference_year,
            limits: defaults.limits,
        }
    }

    #[must_use]
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Load the configured catalog and build an engine over it.
    ///
    /// # Errors
    /// Propagates the catalog load failure; the engine must not serve
    /// requests without a catalog.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = CatalogStore::load(&config.catalog_path)?;
        Ok(Self::new(catalog)
            .with_reference_year(config.reference_year)
            .with_limits(config.limits))
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn reference_year(&self) -> i32 {
        self.reference_year
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            source: self.catalog.source().map(PathBuf::from),
            songs: self.catalog.len(),
            clusters: self.catalog.cluster_sizes().len(),
            indices_built: self.indices.built(),
        }
    }
}
