use cancionero_core::model::{ResultRecord, SongRecord};
use cancionero_core::taxonomy::{Feature, Mood};

use super::QueryEngine;

impl QueryEngine {
    /// Songs matching a mood group, best first. Unknown moods fall back to
    /// [`get_popular_songs`](Self::get_popular_songs).
    pub fn get_songs_by_mood(&self, mood: &str, limit: usize) -> Vec<ResultRecord> {
        let Some(group) = Mood::parse(mood) else {
            log::debug!("Unknown mood {mood:?}, returning popular songs");
            return self.get_popular_songs(limit);
        };

        self.filter_sorted(
            |song| group.matches(song),
            |a, b| group.compare(a, b),
            limit,
        )
    }

    /// Songs with a musical feature, best first. Unknown features fall back
    /// to [`get_popular_songs`](Self::get_popular_songs).
    pub fn get_songs_by_feature(&self, feature: &str, limit: usize) -> Vec<ResultRecord> {
        let Some(preset) = Feature::parse(feature) else {
            log::debug!("Unknown feature {feature:?}, returning popular songs");
            return self.get_popular_songs(limit);
        };

        let year = self.reference_year;
        self.filter_sorted(
            |song| preset.matches(song, year),
            |a, b| preset.compare(a, b),
            limit,
        )
    }

    fn filter_sorted<P, C>(&self, predicate: P, compare: C, limit: usize) -> Vec<ResultRecord>
    where
        P: Fn(&SongRecord) -> bool,
        C: Fn(&SongRecord, &SongRecord) -> std::cmp::Ordering,
    {
        let mut songs: Vec<&SongRecord> = self.catalog.all().filter(|&song| predicate(song)).collect();
        songs.sort_by(|&a, &b| compare(a, b));
        songs.truncate(limit);
        songs.into_iter().map(ResultRecord::from).collect()
    }
}
