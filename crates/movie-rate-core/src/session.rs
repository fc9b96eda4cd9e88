//! Search session state machine.
//!
//! The session owns the query text, the latest results, and the
//! loading/error status. It never performs IO itself: `begin_query` hands
//! back a dispatch describing the fetch to run, and the caller feeds the
//! outcome to `finish_search`. That keeps the transition function pure
//! (state, event) -> state and makes the supersession rules testable
//! without a network.

use movie_rate_models::SearchResult;
use movie_rate_omdb::FetchError;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Fixed user-facing message for a search with no results.
pub const NO_RESULTS_MESSAGE: &str = "No movies found for that search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub phase: SearchPhase,
    pub error: Option<String>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            phase: SearchPhase::Idle,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }
}

/// What the caller must do after a query change.
#[derive(Debug)]
pub enum QueryDispatch {
    /// Nothing to fetch (empty-query fast path).
    None,
    /// Run a search and report back with `finish_search(generation, ..)`.
    Search {
        generation: u64,
        token: CancellationToken,
        query: String,
    },
}

pub struct SearchSession {
    state: SessionState,
    generation: u64,
    inflight: Option<CancellationToken>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
            generation: 0,
            inflight: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle a query text change. Cancels any in-flight search first; only
    /// the dispatch returned here may ever write results back.
    pub fn begin_query(&mut self, text: &str) -> QueryDispatch {
        self.cancel_inflight();
        // Bump even on the fast path so a cancelled search that loses the
        // abort race still gets ignored by finish_search.
        self.generation += 1;
        self.state.query = text.to_string();
        self.state.error = None;

        if text.trim().is_empty() {
            self.state.results.clear();
            self.state.phase = SearchPhase::Success;
            return QueryDispatch::None;
        }

        self.state.phase = SearchPhase::Loading;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());
        QueryDispatch::Search {
            generation: self.generation,
            token,
            query: text.trim().to_string(),
        }
    }

    /// Commit a search outcome. Outcomes from superseded generations are
    /// discarded without touching state.
    pub fn finish_search(&mut self, generation: u64, outcome: Result<Vec<SearchResult>, FetchError>) {
        if generation != self.generation {
            trace!(generation, current = self.generation, "dropping stale search outcome");
            return;
        }
        self.inflight = None;

        match outcome {
            Ok(results) => {
                self.state.results = results;
                self.state.phase = SearchPhase::Success;
                self.state.error = None;
            }
            Err(FetchError::Aborted) => {
                // Supersession is expected and silent.
            }
            Err(FetchError::NotFound(_)) => {
                self.state.results.clear();
                self.state.phase = SearchPhase::Error;
                self.state.error = Some(NO_RESULTS_MESSAGE.to_string());
            }
            Err(FetchError::Network(message)) => {
                self.state.results.clear();
                self.state.phase = SearchPhase::Error;
                self.state.error = Some(message);
            }
        }
    }

    /// Teardown: cancel any outstanding request so a late completion can't
    /// mutate state after disposal.
    pub fn shutdown(&mut self) {
        self.cancel_inflight();
        self.generation += 1;
    }

    fn cancel_inflight(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
