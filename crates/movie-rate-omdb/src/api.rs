//! Wire types for the OMDb JSON API and their mapping into domain models.
//!
//! OMDb responds with capitalized field names and stringly-typed values
//! ("148 min", "8.8", "N/A"); everything numeric is parsed defensively here
//! so the rest of the app never sees a raw wire value.

use movie_rate_models::{MovieDetail, SearchResult};
use serde::Deserialize;

use crate::error::FetchError;

#[derive(Debug, Deserialize)]
pub(crate) struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Poster")]
    poster: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Released", default)]
    released: String,
    #[serde(rename = "Actors", default)]
    actors: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Genre", default)]
    genre: String,
}

/// OMDb signals "no results" in-band with a `Response: "False"` flag rather
/// than an HTTP status.
fn is_negative_response(response: &str) -> bool {
    response.eq_ignore_ascii_case("false")
}

/// Parse OMDb's "148 min" runtime format. "N/A" and anything else
/// unparseable become None.
pub(crate) fn parse_runtime_minutes(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

/// Parse OMDb's decimal rating string ("8.8"). "N/A" becomes None.
pub(crate) fn parse_imdb_rating(rating: &str) -> Option<f64> {
    rating.trim().parse().ok()
}

impl OmdbSearchResponse {
    pub(crate) fn into_results(self) -> Result<Vec<SearchResult>, FetchError> {
        if is_negative_response(&self.response) {
            let message = self.error.unwrap_or_else(|| "Movie not found!".to_string());
            return Err(FetchError::NotFound(message));
        }
        Ok(self
            .search
            .into_iter()
            .map(|item| SearchResult {
                imdb_id: item.imdb_id,
                title: item.title,
                year: item.year,
                poster_url: item.poster,
            })
            .collect())
    }
}

impl OmdbDetailResponse {
    pub(crate) fn into_detail(self) -> Result<MovieDetail, FetchError> {
        if is_negative_response(&self.response) {
            let message = self.error.unwrap_or_else(|| "Movie not found!".to_string());
            return Err(FetchError::NotFound(message));
        }
        Ok(MovieDetail {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: self.poster,
            runtime_minutes: parse_runtime_minutes(&self.runtime),
            imdb_rating: parse_imdb_rating(&self.imdb_rating),
            plot: self.plot,
            released: self.released,
            actors: self.actors,
            director: self.director,
            genre: self.genre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("148 min"), Some(148));
        assert_eq!(parse_runtime_minutes("90 min"), Some(90));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }

    #[test]
    fn test_parse_imdb_rating() {
        assert_eq!(parse_imdb_rating("8.8"), Some(8.8));
        assert_eq!(parse_imdb_rating("10"), Some(10.0));
        assert_eq!(parse_imdb_rating("N/A"), None);
    }

    #[test]
    fn test_search_response_maps_fields() {
        let json = r#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://example.com/p.jpg"}
            ],
            "totalResults": "1",
            "Response": "True"
        }"#;
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        let results = response.into_results().unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt1375666");
        assert_eq!(results[0].title, "Inception");
        assert_eq!(results[0].year, "2010");
        assert_eq!(results[0].poster_url, "https://example.com/p.jpg");
    }

    #[test]
    fn test_search_response_false_is_not_found() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();

        match response.into_results() {
            Err(FetchError::NotFound(message)) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected NotFound, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_detail_response_parses_stringly_numbers() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets.",
            "Poster": "https://example.com/p.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;
        let response: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = response.into_detail().unwrap();

        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.director, "Christopher Nolan");
        assert_eq!(detail.released, "16 Jul 2010");
    }

    #[test]
    fn test_detail_response_na_fields_become_none() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1921",
            "Runtime": "N/A",
            "imdbRating": "N/A",
            "imdbID": "tt0000001",
            "Response": "True"
        }"#;
        let response: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = response.into_detail().unwrap();

        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.imdb_rating, None);
    }

    #[test]
    fn test_detail_response_false_is_not_found() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let response: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.into_detail(), Err(FetchError::NotFound(_))));
    }
}
