use serde::{Deserialize, Serialize};

use crate::model::SongRecord;

/// A numeric catalog column that can be projected out of song records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Acousticness,
    Danceability,
    DurationMs,
    Instrumentalness,
    Liveness,
    Loudness,
    Popularity,
    Speechiness,
    Tempo,
    YearOriginal,
    PopularityOriginal,
    DurationMsOriginal,
    LoudnessOriginal,
    TempoOriginal,
    Cluster,
}

impl Column {
    /// Normalized features, in the order used for distance computation.
    pub const FEATURES: [Self; 9] = [
        Self::Acousticness,
        Self::Danceability,
        Self::DurationMs,
        Self::Instrumentalness,
        Self::Liveness,
        Self::Loudness,
        Self::Popularity,
        Self::Speechiness,
        Self::Tempo,
    ];

    /// Original-scale columns every catalog source must provide.
    pub const ORIGINALS: [Self; 5] = [
        Self::YearOriginal,
        Self::PopularityOriginal,
        Self::DurationMsOriginal,
        Self::LoudnessOriginal,
        Self::TempoOriginal,
    ];

    /// Header name of the column in the catalog source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Acousticness => "acousticness",
            Self::Danceability => "danceability",
            Self::DurationMs => "duration_ms",
            Self::Instrumentalness => "instrumentalness",
            Self::Liveness => "liveness",
            Self::Loudness => "loudness",
            Self::Popularity => "popularity",
            Self::Speechiness => "speechiness",
            Self::Tempo => "tempo",
            Self::YearOriginal => "year_original",
            Self::PopularityOriginal => "popularity_original",
            Self::DurationMsOriginal => "duration_ms_original",
            Self::LoudnessOriginal => "loudness_original",
            Self::TempoOriginal => "tempo_original",
            Self::Cluster => "cluster",
        }
    }

    /// Read this column from a record as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, song: &SongRecord) -> f64 {
        let features = &song.features;
        let original = &song.original;
        match self {
            Self::Acousticness => features.acousticness,
            Self::Danceability => features.danceability,
            Self::DurationMs => features.duration_ms,
            Self::Instrumentalness => features.instrumentalness,
            Self::Liveness => features.liveness,
            Self::Loudness => features.loudness,
            Self::Popularity => features.popularity,
            Self::Speechiness => features.speechiness,
            Self::Tempo => features.tempo,
            Self::YearOriginal => f64::from(original.year),
            Self::PopularityOriginal => original.popularity,
            Self::DurationMsOriginal => original.duration_ms as f64,
            Self::LoudnessOriginal => original.loudness,
            Self::TempoOriginal => original.tempo,
            Self::Cluster => song.cluster.get() as f64,
        }
    }
}

/// Text columns every catalog source must provide besides the numeric ones.
pub(crate) const TEXT_COLUMNS: [&str; 2] = ["name", "artists"];
