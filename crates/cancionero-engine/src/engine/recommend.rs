use cancionero_core::model::{ResultRecord, SongIndex};
use cancionero_core::Result;

use super::QueryEngine;

impl QueryEngine {
    /// Nearest songs to `song_index` within its cluster, closest first.
    ///
    /// The query song itself is never returned. Each record carries the raw
    /// Euclidean distance over the normalized features; distances are
    /// unbounded, so `1 - distance` is not a similarity.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`](cancionero_core::Error::NotFound) if the
    /// index is outside the catalog.
    pub fn get_recommendations(&self, song_index: usize) -> Result<Vec<ResultRecord>> {
        let index = SongIndex::new(song_index);
        let song = self.catalog.get(index)?;
        let neighbors = self.indices.get_or_build(song.cluster)?;

        let found = neighbors.query(&song.feature_vector());
        let keep = neighbors.k().saturating_sub(1);

        found
            .into_iter()
            .filter(|neighbor| neighbor.index != index)
            .take(keep)
            .map(|neighbor| {
                let record = self.catalog.get(neighbor.index)?;
                Ok(ResultRecord::from(record).with_distance(neighbor.distance))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cancionero_core::model::SongRecord;
    use cancionero_core::CatalogStore;

    use crate::engine::{fixtures, QueryEngine};

    #[test]
    fn test_excludes_query_song() {
        let engine = fixtures::engine();
        for index in 0..6 {
            let found = engine.get_recommendations(index).unwrap();
            assert!(found.iter().all(|r| r.index.get() != index));
            assert!(found.iter().all(|r| r.distance.is_some()));
        }
    }

    #[test]
    fn test_sorted_by_distance() {
        let engine = fixtures::engine();
        let found = engine.get_recommendations(0).unwrap();
        // Cluster 0 has three songs, so the whole catalog is searched.
        assert_eq!(found.len(), 5);
        let distances: Vec<f64> = found.iter().filter_map(|r| r.distance).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(found[0].index.get(), 1);
    }

    #[test]
    fn test_idempotent() {
        let engine = fixtures::engine();
        let first = engine.get_recommendations(3).unwrap();
        let second = engine.get_recommendations(3).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.summary().indices_built, 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let engine = fixtures::engine();
        assert!(engine.get_recommendations(6).unwrap_err().is_not_found());
        assert!(engine.get_recommendations(usize::MAX).unwrap_err().is_not_found());
    }

    #[test]
    fn test_large_cluster_stays_inside_partition() {
        let mut songs: Vec<SongRecord> = (0..8u8)
            .map(|i| {
                SongRecord::new(format!("a{i}"), "['A']")
                    .with_cluster(0)
                    .with_danceability(f64::from(i) / 100.0)
            })
            .collect();
        songs.push(SongRecord::new("b", "['B']").with_cluster(1));
        let engine = QueryEngine::new(CatalogStore::from_records(songs).unwrap());

        let found = engine.get_recommendations(0).unwrap();
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|r| r.cluster.get() == 0));
        let order: Vec<usize> = found.iter().map(|r| r.index.get()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_song_catalog() {
        let engine = QueryEngine::new(
            CatalogStore::from_records(vec![SongRecord::new("solo", "['A']")]).unwrap(),
        );
        assert!(engine.get_recommendations(0).unwrap().is_empty());
    }
}
