use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use cancionero_core::model::{ClusterId, SongIndex};
use cancionero_core::{CatalogStore, Column, Result};

use crate::neighbor::NeighborIndex;

/// Clusters with fewer members than this are searched against the whole
/// catalog instead.
pub const MIN_PARTITION_SIZE: usize = 6;

type Slot = Arc<OnceCell<Arc<NeighborIndex>>>;

/// Lazily built neighbor indices, one per cluster id.
///
/// Each cluster gets its own once-cell: concurrent first requests for the
/// same cluster block on that cell while a single caller builds the index.
/// Requests for other clusters are not blocked.
#[derive(Debug)]
pub struct ClusterIndexCache {
    catalog: Arc<CatalogStore>,
    slots: DashMap<ClusterId, Slot>,
    builds: AtomicUsize,
}

impl ClusterIndexCache {
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            slots: DashMap::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the index for `cluster`, building it on first use.
    pub fn get_or_build(&self, cluster: ClusterId) -> Result<Arc<NeighborIndex>> {
        let built = self
            .slots
            .get(&cluster)
            .and_then(|slot| slot.value().get().cloned());
        if let Some(index) = built {
            return Ok(index);
        }

        // Clone the slot out so the shard lock is released before building.
        let slot: Slot = Arc::clone(self.slots.entry(cluster).or_default().value());
        slot.get_or_try_init(|| self.build(cluster).map(Arc::new))
            .map(Arc::clone)
    }

    /// Number of indices built so far.
    #[must_use]
    pub fn built(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    fn build(&self, cluster: ClusterId) -> Result<NeighborIndex> {
        let mut members = self.catalog.partition(cluster);
        let fallback = members.len() < MIN_PARTITION_SIZE;
        if fallback {
            members = (0..self.catalog.len()).map(SongIndex::new).collect();
        }

        let points = self.catalog.project(&members, &Column::FEATURES)?;
        let index = NeighborIndex::build(&points)?;
        self.builds.fetch_add(1, Ordering::AcqRel);

        if fallback {
            log::info!(
                "Built neighbor index for cluster {cluster} over the whole catalog ({} songs, cluster too small)",
                index.len()
            );
        } else {
            log::info!(
                "Built neighbor index for cluster {cluster} ({} songs)",
                index.len()
            );
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cancionero_core::model::SongRecord;

    fn catalog(clusters: &[i64]) -> Arc<CatalogStore> {
        let songs = clusters
            .iter()
            .enumerate()
            .map(|(i, &cluster)| {
                SongRecord::new(format!("song {i}"), "['Artist']")
                    .with_cluster(cluster)
                    .with_danceability(i as f64 / 10.0)
            })
            .collect();
        Arc::new(CatalogStore::from_records(songs).unwrap())
    }

    #[test]
    fn test_large_cluster_uses_partition() {
        let cache = ClusterIndexCache::new(catalog(&[0, 0, 0, 0, 0, 0, 1, 1]));
        let index = cache.get_or_build(ClusterId::new(0)).unwrap();

        assert_eq!(index.len(), 6);
        assert!(index.members().iter().all(|i| i.get() < 6));
    }

    #[test]
    fn test_small_cluster_falls_back_to_catalog() {
        let cache = ClusterIndexCache::new(catalog(&[0, 0, 0, 0, 0, 0, 1, 1]));
        let index = cache.get_or_build(ClusterId::new(1)).unwrap();

        assert_eq!(index.len(), 8);
        assert_eq!(index.k(), 6);
    }

    #[test]
    fn test_index_is_reused() {
        let cache = ClusterIndexCache::new(catalog(&[0, 0, 1]));
        let first = cache.get_or_build(ClusterId::new(0)).unwrap();
        let second = cache.get_or_build(ClusterId::new(0)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.built(), 1);

        cache.get_or_build(ClusterId::new(1)).unwrap();
        assert_eq!(cache.built(), 2);
    }

    #[test]
    fn test_concurrent_first_requests_build_once() {
        let cache = ClusterIndexCache::new(catalog(&[3; 40]));
        let cache = &cache;

        let indices: Vec<Arc<NeighborIndex>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || cache.get_or_build(ClusterId::new(3)).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.built(), 1);
        assert!(indices.iter().all(|index| Arc::ptr_eq(index, &indices[0])));
    }
}
