use std::collections::HashSet;

use cancionero_core::model::{ResultRecord, SongRecord, Suggestion};

use super::QueryEngine;

/// Suggestion queries shorter than this (in characters) return nothing.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

impl QueryEngine {
    /// Songs whose name equals `name` or whose artists contain it, ignoring
    /// case, newest first.
    ///
    /// Name matches come before artist-only matches among songs of the
    /// same year. An empty `name` matches nothing.
    pub fn find_songs(&self, name: &str) -> Vec<ResultRecord> {
        if name.is_empty() {
            return Vec::new();
        }

        let needle = name.to_lowercase();
        let by_name = self
            .catalog
            .all()
            .filter(|song| song.name.to_lowercase() == needle);
        let by_artist = self
            .catalog
            .all()
            .filter(|song| song.artists.to_lowercase().contains(&needle));

        let mut seen = HashSet::new();
        let mut songs: Vec<&SongRecord> = by_name
            .chain(by_artist)
            .filter(|song| seen.insert(song.index))
            .collect();
        songs.sort_by(|a, b| b.original.year.cmp(&a.original.year));

        log::debug!("find_songs({name:?}) matched {} songs", songs.len());
        songs.into_iter().map(ResultRecord::from).collect()
    }

    /// Autocomplete entries for `query`: up to `limit` name matches, then up
    /// to `limit` artist matches, distinct by `(name, artists)`, truncated
    /// to `limit`.
    pub fn search_suggestions(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS || limit == 0 {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let by_name = self
            .catalog
            .all()
            .filter(|song| song.name.to_lowercase().contains(&needle))
            .take(limit);
        let by_artist = self
            .catalog
            .all()
            .filter(|song| song.artists.to_lowercase().contains(&needle))
            .take(limit);

        let mut seen = HashSet::new();
        by_name
            .chain(by_artist)
            .filter(|song| seen.insert((song.name.as_str(), song.artists.as_str())))
            .take(limit)
            .map(Suggestion::from)
            .collect()
    }
}
