use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::model::SongRecord;
use crate::taxonomy::{ascending, descending};

/// A mood group, reachable through any of its synonyms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Slow, acoustic, quiet songs for anxiety or relaxation.
    Calm,
    Sad,
    Happy,
    /// Fast, danceable songs for energy or focus.
    Energetic,
}

/// Synonyms per mood group, already lowercase.
const MOOD_SYNONYMS: &[(Mood, &[&str])] = &[
    (
        Mood::Calm,
        &[
            "ansiedad",
            "nervios",
            "estrés",
            "estres",
            "tranquilidad",
            "tranquilo",
            "calma",
            "relajante",
            "relajado",
            "anxiety",
            "nervous",
            "stress",
            "calm",
            "relax",
            "relaxed",
            "relaxing",
        ],
    ),
    (
        Mood::Sad,
        &["triste", "tristeza", "depresión", "depresion", "sad", "sadness", "depression"],
    ),
    (Mood::Happy, &["feliz", "alegría", "alegria", "happy", "joy"]),
    (
        Mood::Energetic,
        &[
            "energético",
            "energia",
            "energía",
            "focus",
            "concentración",
            "concentracion",
            "energetic",
            "energy",
            "concentration",
        ],
    ),
];

impl Mood {
    pub const ALL: [Self; 4] = [Self::Calm, Self::Sad, Self::Happy, Self::Energetic];

    /// Resolve a mood name or synonym, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        MOOD_SYNONYMS
            .iter()
            .find(|(_, synonyms)| synonyms.contains(&lowered.as_str()))
            .map(|&(mood, _)| mood)
    }

    #[must_use]
    pub fn synonyms(self) -> &'static [&'static str] {
        MOOD_SYNONYMS
            .iter()
            .find(|&&(mood, _)| mood == self)
            .map(|&(_, synonyms)| synonyms)
            .unwrap_or_default()
    }

    /// Whether a song fits this mood.
    #[must_use]
    pub fn matches(self, song: &SongRecord) -> bool {
        let features = &song.features;
        let original = &song.original;
        match self {
            Self::Calm => {
                original.tempo < 90.0
                    && features.acousticness > 0.5
                    && features.danceability < 0.5
                    && original.loudness > -15.0
            }
            Self::Sad => {
                original.tempo < 100.0
                    && features.danceability < 0.6
                    && features.acousticness > 0.4
            }
            Self::Happy => {
                original.tempo > 100.0
                    && features.danceability > 0.6
                    && features.acousticness < 0.5
            }
            Self::Energetic => {
                original.tempo > 120.0
                    && features.danceability > 0.7
                    && features.acousticness < 0.4
            }
        }
    }

    /// Result order for songs matching this mood.
    #[must_use]
    pub fn compare(self, a: &SongRecord, b: &SongRecord) -> Ordering {
        match self {
            Self::Calm | Self::Sad => {
                descending(a.features.acousticness, b.features.acousticness)
                    .then_with(|| ascending(a.original.tempo, b.original.tempo))
            }
            Self::Happy | Self::Energetic => {
                descending(a.features.danceability, b.features.danceability)
                    .then_with(|| descending(a.original.tempo, b.original.tempo))
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Calm => "calm",
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Energetic => "energetic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synonyms_case_insensitive() {
        assert_eq!(Mood::parse("ansiedad"), Some(Mood::Calm));
        assert_eq!(Mood::parse("RELAJADO"), Some(Mood::Calm));
        assert_eq!(Mood::parse("Tristeza"), Some(Mood::Sad));
        assert_eq!(Mood::parse("ALEGRÍA"), Some(Mood::Happy));
        assert_eq!(Mood::parse("Energético"), Some(Mood::Energetic));
        assert_eq!(Mood::parse("focus"), Some(Mood::Energetic));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Mood::parse("nonexistent-mood"), None);
        assert_eq!(Mood::parse(""), None);
    }

    #[test]
    fn test_every_mood_has_synonyms() {
        for mood in Mood::ALL {
            assert!(!mood.synonyms().is_empty());
            assert!(mood.synonyms().contains(&mood.to_string().as_str()));
        }
    }

    #[test]
    fn test_calm_predicate() {
        let calm = SongRecord::new("Nocturne", "['Chopin']")
            .with_tempo(70.0)
            .with_acousticness(0.9)
            .with_danceability(0.2)
            .with_loudness(-12.0);
        assert!(Mood::Calm.matches(&calm));

        let too_loud_floor = calm.clone().with_loudness(-20.0);
        assert!(!Mood::Calm.matches(&too_loud_floor));
    }

    #[test]
    fn test_energetic_predicate_and_order() {
        let a = SongRecord::new("a", "x")
            .with_tempo(128.0)
            .with_danceability(0.8)
            .with_acousticness(0.1);
        let b = SongRecord::new("b", "x")
            .with_tempo(140.0)
            .with_danceability(0.8)
            .with_acousticness(0.1);
        assert!(Mood::Energetic.matches(&a));
        assert!(!Mood::Energetic.matches(&a.clone().with_tempo(110.0)));

        // Equal danceability: faster song first.
        assert_eq!(Mood::Energetic.compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_sad_order_prefers_acoustic_then_slow() {
        let a = SongRecord::new("a", "x").with_acousticness(0.9).with_tempo(90.0);
        let b = SongRecord::new("b", "x").with_acousticness(0.9).with_tempo(60.0);
        let c = SongRecord::new("c", "x").with_acousticness(0.5).with_tempo(50.0);

        let mut songs = vec![&c, &a, &b];
        songs.sort_by(|x, y| Mood::Sad.compare(x, y));
        let names: Vec<_> = songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
