//! Bundled sample catalog shown on the films and artists pages.
//!
//! The UI ships without a backend, so the listings come from an embedded
//! JSON document instead of an HTTP call.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    pub id: u32,
    pub title: String,
    pub release_year: u16,
    pub director: String,
    pub rating: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
    pub surname: String,
    pub type_artist: ArtistKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ArtistKind {
    #[serde(rename = "ACTOR")]
    Actor,
    #[serde(rename = "DIRECTOR")]
    Director,
}

impl ArtistKind {
    pub fn label(self) -> &'static str {
        match self {
            ArtistKind::Actor => "Actor",
            ArtistKind::Director => "Director",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    films: Vec<Film>,
    artists: Vec<Artist>,
}

const CATALOG_JSON: &str = include_str!("catalog.json");

fn catalog() -> Catalog {
    match serde_json::from_str(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("embedded catalog failed to parse: {}", e);
            Catalog {
                films: Vec::new(),
                artists: Vec::new(),
            }
        }
    }
}

pub fn sample_films() -> Vec<Film> {
    catalog().films
}

pub fn sample_artists() -> Vec<Artist> {
    catalog().artists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog: Catalog =
            serde_json::from_str(CATALOG_JSON).expect("bundled catalog should be valid JSON");
        assert!(!catalog.films.is_empty(), "Catalog should ship films");
        assert!(!catalog.artists.is_empty(), "Catalog should ship artists");
    }

    #[test]
    fn test_films_have_populated_fields() {
        for film in sample_films() {
            assert!(!film.title.is_empty(), "Film {} has an empty title", film.id);
            assert!(!film.director.is_empty(), "Film {} has no director", film.id);
            assert!(
                (1890..=2100).contains(&film.release_year),
                "Film {} has implausible year {}",
                film.id,
                film.release_year
            );
            assert!(
                (0.0..=5.0).contains(&film.rating),
                "Film {} rating {} outside 0-5",
                film.id,
                film.rating
            );
        }
    }

    #[test]
    fn test_artists_cover_both_kinds() {
        let artists = sample_artists();
        assert!(artists.iter().any(|a| a.type_artist == ArtistKind::Actor));
        assert!(artists.iter().any(|a| a.type_artist == ArtistKind::Director));
    }
}
