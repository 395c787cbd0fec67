//! Metadata lookup against an OMDb-shaped HTTP API.
//!
//! One blocking GET per add, keyed by title. The client is deliberately
//! small and synchronous; the whole program is a single-threaded prompt
//! loop, so there is nothing to overlap the request with.

use crate::error::{CatalogError, Result};
use crate::model::Movie;
use reqwest::blocking::Client;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";
pub const API_KEY_VAR: &str = "OMDB_API_KEY";

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Response body of the metadata API. Every field arrives as a string;
/// `Response`/`Error` carry the API-level success flag and message.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from the `OMDB_API_KEY` environment variable.
    /// Returns `None` when no key is configured; the CLI then falls back to
    /// manual entry.
    pub fn from_env(base_url: &str) -> Result<Option<Self>> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Some(Self::new(base_url, key)?)),
            _ => Ok(None),
        }
    }

    /// Fetch a movie by title and map the response into the local schema.
    pub fn lookup(&self, title: &str) -> Result<Movie> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()?
            .error_for_status()?;
        let data: OmdbResponse = response.json()?;

        if data.response != "True" {
            let reason = data.error.unwrap_or_else(|| "Movie not found".to_string());
            return Err(CatalogError::Lookup(reason));
        }

        let title = data
            .title
            .ok_or_else(|| CatalogError::Lookup("Response carries no title".to_string()))?;
        let year = parse_year(data.year.as_deref())
            .ok_or_else(|| CatalogError::Lookup(format!("Unparseable year for {}", title)))?;
        let rating = data
            .imdb_rating
            .as_deref()
            .and_then(|r| r.parse::<f64>().ok())
            .ok_or_else(|| CatalogError::Lookup(format!("Unparseable rating for {}", title)))?;
        let poster = data.poster.filter(|p| p != "N/A");

        Ok(Movie::new(title, year, rating).with_poster(poster))
    }
}

/// The API reports series years as a range ("2010" with a dash and an end
/// year, or a trailing dash for ongoing runs); take the leading run of digits.
fn parse_year(raw: Option<&str>) -> Option<i32> {
    let digits: String = raw?
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
