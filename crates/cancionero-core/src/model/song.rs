use serde::{Deserialize, Serialize};

use crate::model::ids::{ClusterId, SongIndex};

/// Number of normalized features used for similarity search.
pub const FEATURE_COUNT: usize = 9;

/// Normalized numeric features used for distance computation.
///
/// Values are already scaled by the offline pipeline; `duration_ms`,
/// `loudness`, `popularity` and `tempo` here are *not* display values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub duration_ms: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub loudness: f64,
    pub popularity: f64,
    pub speechiness: f64,
    pub tempo: f64,
}

impl AudioFeatures {
    /// The feature vector in canonical column order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.acousticness,
            self.danceability,
            self.duration_ms,
            self.instrumentalness,
            self.liveness,
            self.loudness,
            self.popularity,
            self.speechiness,
            self.tempo,
        ]
    }
}

/// Original-scale values, used for display and for mood/feature predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalValues {
    pub year: i32,
    /// Popularity on a 0-100 scale.
    pub popularity: f64,
    pub duration_ms: i64,
    /// Loudness in dB.
    pub loudness: f64,
    /// Tempo in BPM.
    pub tempo: f64,
}

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Row position, assigned once at load time.
    pub index: SongIndex,
    pub name: String,

    /// Artist list as a single encoded string (e.g. `['A', 'B']`).
    pub artists: String,

    pub features: AudioFeatures,
    pub original: OriginalValues,
    pub cluster: ClusterId,
}

impl SongRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, artists: impl Into<String>) -> Self {
        Self {
            index: SongIndex::new(0),
            name: name.into(),
            artists: artists.into(),
            features: AudioFeatures::default(),
            original: OriginalValues::default(),
            cluster: ClusterId::new(0),
        }
    }

    #[must_use]
    pub fn with_cluster(mut self, cluster: i64) -> Self {
        self.cluster = ClusterId::new(cluster);
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: AudioFeatures) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_original(mut self, original: OriginalValues) -> Self {
        self.original = original;
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.original.year = year;
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.original.popularity = popularity;
        self
    }

    #[must_use]
    pub fn with_tempo(mut self, bpm: f64) -> Self {
        self.original.tempo = bpm;
        self
    }

    #[must_use]
    pub fn with_loudness(mut self, db: f64) -> Self {
        self.original.loudness = db;
        self
    }

    #[must_use]
    pub fn with_acousticness(mut self, value: f64) -> Self {
        self.features.acousticness = value;
        self
    }

    #[must_use]
    pub fn with_danceability(mut self, value: f64) -> Self {
        self.features.danceability = value;
        self
    }

    #[must_use]
    pub fn with_instrumentalness(mut self, value: f64) -> Self {
        self.features.instrumentalness = value;
        self
    }

    #[must_use]
    pub fn with_liveness(mut self, value: f64) -> Self {
        self.features.liveness = value;
        self
    }

    #[must_use]
    pub fn with_speechiness(mut self, value: f64) -> Self {
        self.features.speechiness = value;
        self
    }

    /// Normalized feature vector used for nearest-neighbor search.
    #[must_use]
    pub const fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        self.features.as_array()
    }
}
