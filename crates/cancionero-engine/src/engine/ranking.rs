use cancionero_core::model::{ResultRecord, SongRecord};

use super::QueryEngine;

impl QueryEngine {
    /// The `limit` most popular songs by original popularity, ties in
    /// catalog order.
    pub fn get_popular_songs(&self, limit: usize) -> Vec<ResultRecord> {
        let mut songs: Vec<&SongRecord> = self.catalog.all().collect();
        songs.sort_by(|a, b| b.original.popularity.total_cmp(&a.original.popularity));
        songs.truncate(limit);
        songs.into_iter().map(ResultRecord::from).collect()
    }
}
