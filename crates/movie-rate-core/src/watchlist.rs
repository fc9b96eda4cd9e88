use movie_rate_models::{WatchedEntry, WatchlistSummary};
use tracing::debug;

/// In-memory ordered collection of rated movies. Session-scoped: nothing is
/// persisted, the list is gone when the process exits.
#[derive(Debug, Default)]
pub struct WatchlistStore {
    entries: Vec<WatchedEntry>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.entries.iter().any(|e| e.imdb_id == imdb_id)
    }

    /// The recorded rating for an id, for the read-only "you rated this"
    /// view on an already-watched movie.
    pub fn user_rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.imdb_id == imdb_id)
            .map(|e| e.user_rating)
    }

    /// Append an entry, rejecting ids already present. Returns whether the
    /// entry was added.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.contains(&entry.imdb_id) {
            debug!(imdb_id = %entry.imdb_id, "watchlist add rejected: duplicate id");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every entry matching the id.
    pub fn remove(&mut self, imdb_id: &str) {
        self.entries.retain(|e| e.imdb_id != imdb_id);
    }

    /// Arithmetic means over the collection. Empty list (or an average whose
    /// every input is missing) yields 0.0, never NaN.
    pub fn summary(&self) -> WatchlistSummary {
        WatchlistSummary {
            count: self.entries.len(),
            avg_imdb_rating: mean(self.entries.iter().filter_map(|e| e.imdb_rating)),
            avg_user_rating: mean(self.entries.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime_minutes: mean(
                self.entries
                    .iter()
                    .filter_map(|e| e.runtime_minutes.map(f64::from)),
            ),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
