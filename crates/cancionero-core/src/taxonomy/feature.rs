use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::model::SongRecord;
use crate::taxonomy::descending;

/// Songs released within this many years of the reference year are `recent`.
pub const RECENT_WINDOW_YEARS: i32 = 10;

/// A musical-feature preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Recent,
    Danceable,
    Acoustic,
    HighEnergy,
    Instrumental,
    Live,
    Speech,
}

impl Feature {
    pub const ALL: [Self; 7] = [
        Self::Recent,
        Self::Danceable,
        Self::Acoustic,
        Self::HighEnergy,
        Self::Instrumental,
        Self::Live,
        Self::Speech,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Danceable => "danceable",
            Self::Acoustic => "acoustic",
            Self::HighEnergy => "high-energy",
            Self::Instrumental => "instrumental",
            Self::Live => "live",
            Self::Speech => "speech",
        }
    }

    /// Resolve a feature name. Names match exactly; `Danceable` is unknown.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.name() == input)
    }

    /// Whether a song has this feature. `reference_year` anchors `recent`.
    #[must_use]
    pub fn matches(self, song: &SongRecord, reference_year: i32) -> bool {
        let features = &song.features;
        match self {
            Self::Recent => song.original.year >= reference_year - RECENT_WINDOW_YEARS,
            Self::Danceable => features.danceability > 0.7,
            Self::Acoustic => features.acousticness > 0.5,
            Self::HighEnergy => features.danceability > 0.7 && song.original.tempo > 120.0,
            Self::Instrumental => features.instrumentalness > 0.5,
            Self::Live => features.liveness > 0.3,
            Self::Speech => features.speechiness > 0.3,
        }
    }

    /// Primary key descending, then popularity descending.
    #[must_use]
    pub fn compare(self, a: &SongRecord, b: &SongRecord) -> Ordering {
        let primary = match self {
            Self::Recent => b.original.year.cmp(&a.original.year),
            Self::Danceable => descending(a.features.danceability, b.features.danceability),
            Self::Acoustic => descending(a.features.acousticness, b.features.acousticness),
            Self::HighEnergy => descending(a.features.danceability, b.features.danceability)
                .then_with(|| descending(a.original.tempo, b.original.tempo)),
            Self::Instrumental => {
                descending(a.features.instrumentalness, b.features.instrumentalness)
            }
            Self::Live => descending(a.features.liveness, b.features.liveness),
            Self::Speech => descending(a.features.speechiness, b.features.speechiness),
        };
        primary.then_with(|| descending(a.original.popularity, b.original.popularity))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for feature in Feature::ALL {
            assert_eq!(Feature::parse(feature.name()), Some(feature));
        }
        assert_eq!(Feature::parse("High-Energy"), None);
        assert_eq!(Feature::parse("DANCEABLE"), None);
        assert_eq!(Feature::parse("loud"), None);
        assert_eq!(Feature::parse(""), None);
    }

    #[test]
    fn test_recent_uses_reference_year() {
        let song = SongRecord::new("a", "x").with_year(2014);
        assert!(Feature::Recent.matches(&song, 2024));
        assert!(!Feature::Recent.matches(&song, 2025));
    }

    #[test]
    fn test_high_energy_needs_tempo() {
        let song = SongRecord::new("a", "x").with_danceability(0.8).with_tempo(121.0);
        assert!(Feature::HighEnergy.matches(&song, 2024));
        assert!(Feature::Danceable.matches(&song, 2024));
        assert!(!Feature::HighEnergy.matches(&song.with_tempo(100.0), 2024));
    }

    #[test]
    fn test_popularity_breaks_ties() {
        let a = SongRecord::new("a", "x").with_liveness(0.6).with_popularity(40.0);
        let b = SongRecord::new("b", "x").with_liveness(0.6).with_popularity(70.0);
        assert_eq!(Feature::Live.compare(&b, &a), Ordering::Less);
        assert_eq!(Feature::Live.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Feature::HighEnergy).unwrap();
        assert_eq!(json, "\"high-energy\"");
    }
}
