use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detail::MovieDetail;

/// A rated movie in the session watchlist. Immutable once added; the only
/// way to change a rating is to remove the entry and rate again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    /// Personal rating, 1-10. A zero never reaches the watchlist.
    pub user_rating: u8,
    pub rated_at: DateTime<Utc>,
}

impl WatchedEntry {
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Self {
        Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            runtime_minutes: detail.runtime_minutes,
            imdb_rating: detail.imdb_rating,
            user_rating,
            rated_at: Utc::now(),
        }
    }
}

/// Aggregate view over the watchlist. Averages are 0.0 for an empty list,
/// and entries missing a value are left out of that average's denominator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WatchlistSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}
