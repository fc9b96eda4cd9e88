use serde::{Deserialize, Serialize};

/// Full record for a single title, fetched lazily per selection.
///
/// `runtime_minutes` and `imdb_rating` are `None` when the upstream service
/// reports "N/A" (common for very old or obscure titles).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}
