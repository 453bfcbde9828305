//! Transport-neutral request boundary.
//!
//! A [`Request`] carries the loosely typed values a client sends (signed
//! indices, optional limits, raw strings). [`QueryEngine::handle`] validates
//! them, dispatches to the matching operation, and wraps the result in a
//! [`Response`]. Errors keep their [`ErrorKind`](cancionero_core::ErrorKind)
//! so transports can map them to statuses.

use serde::{Deserialize, Serialize};

use cancionero_core::model::{ResultRecord, Suggestion};
use cancionero_core::{Error, Result};

use crate::engine::QueryEngine;

/// One query against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    FindSongs {
        name: String,
    },
    PopularSongs {
        #[serde(default)]
        limit: Option<i64>,
    },
    SearchSuggestions {
        query: String,
        #[serde(default)]
        limit: Option<i64>,
    },
    SongsByMood {
        mood: String,
        #[serde(default)]
        limit: Option<i64>,
    },
    SongsByFeature {
        feature: String,
        #[serde(default)]
        limit: Option<i64>,
    },
    Recommendations {
        song_index: i64,
    },
}

/// Operation output, serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Songs(Vec<ResultRecord>),
    Suggestions(Vec<Suggestion>),
}

impl Response {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Songs(songs) => songs.len(),
            Self::Suggestions(suggestions) => suggestions.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryEngine {
    /// Validate and run one request.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] for an empty name, mood, or feature
    /// - [`Error::NotFound`] for a song index outside the catalog
    pub fn handle(&self, request: Request) -> Result<Response> {
        log::debug!("Handling {request:?}");
        let limits = *self.limits();

        let response = match request {
            Request::FindSongs { name } => {
                require("name", &name)?;
                Response::Songs(self.find_songs(&name))
            }
            Request::PopularSongs { limit } => {
                Response::Songs(self.get_popular_songs(resolve_limit(limit, limits.popular)))
            }
            Request::SearchSuggestions { query, limit } => Response::Suggestions(
                self.search_suggestions(&query, resolve_limit(limit, limits.suggestions)),
            ),
            Request::SongsByMood { mood, limit } => {
                require("mood", &mood)?;
                Response::Songs(self.get_songs_by_mood(&mood, resolve_limit(limit, limits.mood)))
            }
            Request::SongsByFeature { feature, limit } => {
                require("feature", &feature)?;
                Response::Songs(
                    self.get_songs_by_feature(&feature, resolve_limit(limit, limits.feature)),
                )
            }
            Request::Recommendations { song_index } => {
                let index =
                    usize::try_from(song_index).map_err(|_| Error::not_found("song", song_index))?;
                Response::Songs(self.get_recommendations(index)?)
            }
        };

        Ok(response)
    }
}

/// Missing limits take the default; negative limits mean "nothing".
fn resolve_limit(limit: Option<i64>, default: usize) -> usize {
    limit.map_or(default, |value| usize::try_from(value).unwrap_or(0))
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures;
    use crate::Limits;
    use cancionero_core::ErrorKind;

    fn songs(response: Response) -> Vec<usize> {
        match response {
            Response::Songs(songs) => songs.iter().map(|r| r.index.get()).collect(),
            Response::Suggestions(_) => panic!("expected songs"),
        }
    }

    #[test]
    fn test_parse_tagged_json() {
        let request: Request =
            serde_json::from_str(r#"{"op": "songs_by_mood", "mood": "calma"}"#).unwrap();
        assert_eq!(
            request,
            Request::SongsByMood {
                mood: "calma".to_string(),
                limit: None
            }
        );

        let request: Request =
            serde_json::from_str(r#"{"op": "recommendations", "song_index": 3}"#).unwrap();
        assert_eq!(request, Request::Recommendations { song_index: 3 });
    }

    #[test]
    fn test_default_limits_apply() {
        let engine = fixtures::engine().with_limits(Limits {
            popular: 2,
            ..Limits::default()
        });
        let response = engine.handle(Request::PopularSongs { limit: None }).unwrap();
        assert_eq!(songs(response), vec![4, 3]);

        let response = engine
            .handle(Request::PopularSongs { limit: Some(3) })
            .unwrap();
        assert_eq!(response.len(), 3);
    }

    #[test]
    fn test_negative_limit_is_empty() {
        let engine = fixtures::engine();
        let response = engine
            .handle(Request::PopularSongs { limit: Some(-1) })
            .unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_empty_strings_rejected() {
        let engine = fixtures::engine();
        let requests = [
            Request::FindSongs {
                name: String::new(),
            },
            Request::SongsByMood {
                mood: String::new(),
                limit: None,
            },
            Request::SongsByFeature {
                feature: String::new(),
                limit: None,
            },
        ];
        for request in requests {
            let err = engine.handle(request).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(err.kind().status_code(), 400);
        }
    }

    #[test]
    fn test_bad_song_index() {
        let engine = fixtures::engine();
        for song_index in [-1, 6, i64::MAX] {
            let err = engine
                .handle(Request::Recommendations { song_index })
                .unwrap_err();
            assert_eq!(err.kind().status_code(), 404);
        }
    }

    #[test]
    fn test_short_suggestion_query_is_not_an_error() {
        let engine = fixtures::engine();
        let response = engine
            .handle(Request::SearchSuggestions {
                query: "y".to_string(),
                limit: None,
            })
            .unwrap();
        assert_eq!(response, Response::Suggestions(Vec::new()));
    }

    #[test]
    fn test_response_serializes_as_array() {
        let engine = fixtures::engine();
        let response = engine
            .handle(Request::Recommendations { song_index: 0 })
            .unwrap();
        let json = serde_json::to_value(&response).unwrap();

        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| item["distance"].is_number()));
    }
}
