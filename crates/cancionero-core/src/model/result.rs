use serde::{Deserialize, Serialize};

use crate::model::ids::{ClusterId, SongIndex};
use crate::model::song::SongRecord;

/// A song as returned by every query operation.
///
/// Display fields (`year`, `popularity`, `duration_ms`, `loudness`, `tempo`)
/// carry the original-scale values, so callers never see normalized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub index: SongIndex,
    pub name: String,
    pub artists: String,
    pub year: i32,
    pub popularity: f64,
    pub duration_ms: i64,
    pub loudness: f64,
    pub tempo: f64,
    pub acousticness: f64,
    pub danceability: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub cluster: ClusterId,

    /// Raw Euclidean distance to the query song; recommendations only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl ResultRecord {
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

impl From<&SongRecord> for ResultRecord {
    fn from(song: &SongRecord) -> Self {
        Self {
            index: song.index,
            name: song.name.clone(),
            artists: song.artists.clone(),
            year: song.original.year,
            popularity: song.original.popularity,
            duration_ms: song.original.duration_ms,
            loudness: song.original.loudness,
            tempo: song.original.tempo,
            acousticness: song.features.acousticness,
            danceability: song.features.danceability,
            instrumentalness: song.features.instrumentalness,
            liveness: song.features.liveness,
            speechiness: song.features.speechiness,
            cluster: song.cluster,
            distance: None,
        }
    }
}

/// Lightweight autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub artists: String,
    pub index: SongIndex,
}

impl From<&SongRecord> for Suggestion {
    fn from(song: &SongRecord) -> Self {
        Self {
            name: song.name.clone(),
            artists: song.artists.clone(),
            index: song.index,
        }
    }
}
