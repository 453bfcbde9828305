use anyhow::Result;
use std::process::ExitCode;

use cancionero_core::model::{ResultRecord, Suggestion};
use cancionero_engine::{QueryEngine, Request, Response};

/// Run one request and print the response.
///
/// Request errors (unknown song, empty argument) are reported with their
/// status code and turn into a failing exit code. Catalog errors abort.
pub fn run_query(engine: &QueryEngine, request: Request, json: bool) -> Result<ExitCode> {
    let response = match engine.handle(request) {
        Ok(response) => response,
        Err(e) if !e.is_fatal() => {
            eprintln!("Error ({}): {e}", e.kind().status_code());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(ExitCode::SUCCESS);
    }

    if response.is_empty() {
        println!("No songs found.");
        return Ok(ExitCode::SUCCESS);
    }

    match &response {
        Response::Songs(songs) => songs.iter().for_each(|song| println!("{}", song_line(song))),
        Response::Suggestions(found) => {
            found.iter().for_each(|entry| println!("{}", suggestion_line(entry)));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn song_line(song: &ResultRecord) -> String {
    let line = format!(
        "{:>7}  {} - {} ({}, popularity {:.0})",
        song.index.get(),
        song.name,
        display_artists(&song.artists),
        song.year,
        song.popularity
    );
    match song.distance {
        Some(distance) => format!("{line}  distance {distance:.4}"),
        None => line,
    }
}

fn suggestion_line(entry: &Suggestion) -> String {
    format!(
        "{:>7}  {} - {}",
        entry.index.get(),
        entry.name,
        display_artists(&entry.artists)
    )
}

/// Render an encoded artist list like `['A', 'B']` as `A, B`.
fn display_artists(artists: &str) -> String {
    let inner = artists
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(artists);

    inner
        .split(", ")
        .map(|name| name.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cancionero_core::model::SongRecord;

    #[test]
    fn test_display_artists() {
        assert_eq!(display_artists("['The Beatles']"), "The Beatles");
        assert_eq!(
            display_artists("['Daft Punk', 'Pharrell Williams']"),
            "Daft Punk, Pharrell Williams"
        );
        assert_eq!(display_artists("[\"Guns N' Roses\"]"), "Guns N' Roses");
        assert_eq!(display_artists("Plain Artist"), "Plain Artist");
    }

    #[test]
    fn test_song_line_shows_raw_distance() {
        let song = SongRecord::new("Yesterday", "['The Beatles']")
            .with_year(1965)
            .with_popularity(76.0);
        let plain = song_line(&ResultRecord::from(&song));
        assert_eq!(plain, "      0  Yesterday - The Beatles (1965, popularity 76)");

        let near = song_line(&ResultRecord::from(&song).with_distance(0.1234));
        assert!(near.ends_with("distance 0.1234"));
    }
}
