use serde::{Deserialize, Serialize};

/// One row of a free-text search response. Discarded wholesale whenever a
/// new query lands; only the detail lookup carries the full record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}
