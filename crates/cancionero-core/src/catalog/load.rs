//! CSV catalog source parsing.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::path::Path;

use crate::catalog::columns::{Column, TEXT_COLUMNS};
use crate::error::{Error, Result};
use crate::model::{AudioFeatures, ClusterId, OriginalValues, SongIndex, SongRecord};

/// One CSV row, addressed by header name. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct SongRow {
    name: String,
    artists: String,
    acousticness: f64,
    danceability: f64,
    duration_ms: f64,
    instrumentalness: f64,
    liveness: f64,
    loudness: f64,
    popularity: f64,
    speechiness: f64,
    tempo: f64,
    #[serde(deserialize_with = "integral")]
    year_original: i32,
    popularity_original: f64,
    #[serde(deserialize_with = "integral")]
    duration_ms_original: i64,
    loudness_original: f64,
    tempo_original: f64,
    #[serde(deserialize_with = "integral")]
    cluster: i64,
}

impl SongRow {
    fn into_record(self, index: usize) -> SongRecord {
        SongRecord {
            index: SongIndex::new(index),
            name: self.name,
            artists: self.artists,
            features: AudioFeatures {
                acousticness: self.acousticness,
                danceability: self.danceability,
                duration_ms: self.duration_ms,
                instrumentalness: self.instrumentalness,
                liveness: self.liveness,
                loudness: self.loudness,
                popularity: self.popularity,
                speechiness: self.speechiness,
                tempo: self.tempo,
            },
            original: OriginalValues {
                year: self.year_original,
                popularity: self.popularity_original,
                duration_ms: self.duration_ms_original,
                loudness: self.loudness_original,
                tempo: self.tempo_original,
            },
            cluster: ClusterId::new(self.cluster),
        }
    }
}

/// Accept integers written as integral floats (`2019.0`), as pandas
/// exports them.
fn integral<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(de::Error::custom(format!(
            "expected an integer, found {value}"
        )));
    }
    #[allow(clippy::cast_possible_truncation)]
    T::try_from(value as i64).map_err(|_| de::Error::custom(format!("{value} is out of range")))
}

fn load_error(path: &Path, reason: impl Into<String>) -> Error {
    Error::DataLoad {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Check the header row, reporting every missing column at once.
fn check_headers(path: &Path, headers: &csv::StringRecord) -> Result<()> {
    let missing = |names: Vec<&str>| -> Vec<String> {
        names
            .into_iter()
            .filter(|name| !headers.iter().any(|h| h.trim() == *name))
            .map(String::from)
            .collect()
    };

    let originals = missing(Column::ORIGINALS.iter().map(|c| c.name()).collect());
    if !originals.is_empty() {
        return Err(Error::MissingColumns {
            path: path.to_path_buf(),
            what: "original columns",
            columns: originals,
        });
    }

    let required = missing(
        TEXT_COLUMNS
            .iter()
            .copied()
            .chain(Column::FEATURES.iter().map(|c| c.name()))
            .chain(std::iter::once(Column::Cluster.name()))
            .collect(),
    );
    if !required.is_empty() {
        return Err(Error::MissingColumns {
            path: path.to_path_buf(),
            what: "required columns",
            columns: required,
        });
    }

    Ok(())
}

/// Read every song from a CSV file, numbering rows from zero.
pub(crate) fn read_csv(path: &Path) -> Result<Vec<SongRecord>> {
    if !path.is_file() {
        return Err(load_error(path, "catalog file not found"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| load_error(path, format!("failed to open CSV: {e}")))?;

    let headers = reader
        .headers()
        .map_err(|e| load_error(path, format!("failed to read headers: {e}")))?
        .clone();
    check_headers(path, &headers)?;

    let mut songs = Vec::new();
    for (index, row) in reader.deserialize::<SongRow>().enumerate() {
        // Header is line 1.
        let row = row.map_err(|e| load_error(path, format!("line {}: {e}", index + 2)))?;
        songs.push(row.into_record(index));
    }

    if songs.is_empty() {
        return Err(load_error(path, "catalog contains no songs"));
    }

    Ok(songs)
}
