//! Single owner of all mutable UI state.
//!
//! Composes the search session, the selection controller, and the
//! watchlist. All mutation happens through this type in response to one
//! in-order event stream, so no locking is needed anywhere in core.

use movie_rate_models::{MovieDetail, SearchResult, WatchedEntry};
use movie_rate_omdb::FetchError;

use crate::selection::{SelectDispatch, SelectionController};
use crate::session::{QueryDispatch, SearchSession, SessionState};
use crate::watchlist::WatchlistStore;

#[derive(Default)]
pub struct App {
    session: SearchSession,
    selection: SelectionController,
    watchlist: WatchlistStore,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: SearchSession::new(),
            selection: SelectionController::new(),
            watchlist: WatchlistStore::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    /// Query text changed. Any open detail view closes, superseded searches
    /// are cancelled.
    pub fn set_query(&mut self, text: &str) -> QueryDispatch {
        self.selection.close();
        self.session.begin_query(text)
    }

    pub fn finish_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<SearchResult>, FetchError>,
    ) {
        self.session.finish_search(generation, outcome);
    }

    pub fn select(&mut self, imdb_id: &str) -> SelectDispatch {
        self.selection.select(imdb_id)
    }

    pub fn finish_detail(&mut self, imdb_id: &str, outcome: Result<MovieDetail, FetchError>) {
        self.selection.finish_detail(imdb_id, outcome);
    }

    /// Escape key / back button.
    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// The recorded rating when the selected movie is already on the
    /// watchlist; the UI shows this read-only instead of the rating input.
    pub fn selected_watched_rating(&self) -> Option<u8> {
        self.selection
            .selected()
            .and_then(|id| self.watchlist.user_rating_for(id))
    }

    /// Confirm the rating for the selected movie and move it onto the
    /// watchlist. Returns the new entry, or None when the action is
    /// disabled (no detail loaded, rating 0, or already watched).
    pub fn rate_selected(&mut self, rating: u8) -> Option<WatchedEntry> {
        let selected = self.selection.selected()?;
        if self.watchlist.contains(selected) {
            return None;
        }
        let entry = self.selection.confirm_rating(rating)?;
        if self.watchlist.add(entry.clone()) {
            Some(entry)
        } else {
            None
        }
    }

    pub fn remove_watched(&mut self, imdb_id: &str) {
        self.watchlist.remove(imdb_id);
    }

    /// Teardown: cancel every outstanding request so late completions have
    /// nothing to write into.
    pub fn shutdown(&mut self) {
        self.session.shutdown();
        self.selection.close();
    }
}
