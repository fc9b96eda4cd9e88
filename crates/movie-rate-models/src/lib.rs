pub mod detail;
pub mod search;
pub mod watched;

pub use detail::MovieDetail;
pub use search::SearchResult;
pub use watched::{WatchedEntry, WatchlistSummary};
