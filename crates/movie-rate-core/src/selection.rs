//! Selection and detail-view state.
//!
//! Owns which movie (if any) is open for detail viewing, and bridges the
//! rating input into a `WatchedEntry`. Like the search session, it does no
//! IO: `select` returns a fetch dispatch keyed strictly on the selected id,
//! and the caller reports back through `finish_detail`. Keying on the id
//! (not on the fetched record) is what prevents the redundant refetch loop
//! a detail-identity-driven effect would cause.

use movie_rate_models::{MovieDetail, WatchedEntry};
use movie_rate_omdb::FetchError;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// What the caller must do after a selection change.
#[derive(Debug)]
pub enum SelectDispatch {
    /// Selection was cleared (toggle); nothing to fetch.
    None,
    /// Fetch the detail record and report back with `finish_detail`.
    Fetch {
        imdb_id: String,
        token: CancellationToken,
    },
}

#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
    detail: Option<MovieDetail>,
    inflight: Option<CancellationToken>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    /// Toggle semantics: selecting the current id clears the selection,
    /// selecting a different id replaces it and drops the old detail.
    pub fn select(&mut self, imdb_id: &str) -> SelectDispatch {
        self.cancel_inflight();

        if self.selected.as_deref() == Some(imdb_id) {
            self.selected = None;
            self.detail = None;
            return SelectDispatch::None;
        }

        self.selected = Some(imdb_id.to_string());
        self.detail = None;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());
        SelectDispatch::Fetch {
            imdb_id: imdb_id.to_string(),
            token,
        }
    }

    /// Commit a detail outcome. Dropped when the id is no longer selected.
    /// Failures are logged and leave the detail pane empty; they never set
    /// the session error state.
    pub fn finish_detail(&mut self, imdb_id: &str, outcome: Result<MovieDetail, FetchError>) {
        if self.selected.as_deref() != Some(imdb_id) {
            return;
        }
        self.inflight = None;

        match outcome {
            Ok(detail) => self.detail = Some(detail),
            Err(err) if err.is_aborted() => {}
            Err(err) => warn!(imdb_id, error = %err, "detail fetch failed"),
        }
    }

    /// Build a watchlist entry from the loaded detail. A rating of 0 means
    /// "nothing selected on the rating widget" and disables the action;
    /// anything above 10 is clamped.
    pub fn confirm_rating(&self, rating: u8) -> Option<WatchedEntry> {
        if rating == 0 {
            return None;
        }
        let detail = self.detail.as_ref()?;
        Some(WatchedEntry::from_detail(detail, rating.min(10)))
    }

    pub fn close(&mut self) {
        self.cancel_inflight();
        self.selected = None;
        self.detail = None;
    }

    fn cancel_inflight(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_detail(imdb_id: &str) -> MovieDetail {
        MovieDetail {
            imdb_id: imdb_id.to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            poster_url: String::new(),
            runtime_minutes: Some(148),
            imdb_rating: Some(8.8),
            plot: String::new(),
            released: "16 Jul 2010".to_string(),
            actors: String::new(),
            director: "Christopher Nolan".to_string(),
            genre: String::new(),
        }
    }

    #[test]
    fn test_select_twice_returns_to_empty() {
        let mut controller = SelectionController::new();

        assert!(matches!(controller.select("tt1"), SelectDispatch::Fetch { .. }));
        assert_eq!(controller.selected(), Some("tt1"));

        assert!(matches!(controller.select("tt1"), SelectDispatch::None));
        assert_eq!(controller.selected(), None);
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_selecting_new_id_replaces_and_clears_detail() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.finish_detail("tt1", Ok(create_detail("tt1")));
        assert!(controller.detail().is_some());

        controller.select("tt2");
        assert_eq!(controller.selected(), Some("tt2"));
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_reselect_cancels_inflight_fetch() {
        let mut controller = SelectionController::new();
        let token1 = match controller.select("tt1") {
            SelectDispatch::Fetch { token, .. } => token,
            SelectDispatch::None => panic!("expected fetch"),
        };

        controller.select("tt2");
        assert!(token1.is_cancelled());
    }

    #[test]
    fn test_late_detail_for_deselected_id_is_dropped() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.select("tt2");

        controller.finish_detail("tt1", Ok(create_detail("tt1")));
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_failed_detail_leaves_pane_empty() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.finish_detail("tt1", Err(FetchError::Network("timeout".to_string())));

        assert_eq!(controller.selected(), Some("tt1"));
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_confirm_rating_zero_is_noop() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.finish_detail("tt1", Ok(create_detail("tt1")));

        assert!(controller.confirm_rating(0).is_none());
    }

    #[test]
    fn test_confirm_rating_requires_loaded_detail() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        assert!(controller.confirm_rating(9).is_none());
    }

    #[test]
    fn test_confirm_rating_builds_entry_from_detail() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.finish_detail("tt1", Ok(create_detail("tt1")));

        let entry = controller.confirm_rating(9).unwrap();
        assert_eq!(entry.imdb_id, "tt1");
        assert_eq!(entry.user_rating, 9);
        assert_eq!(entry.runtime_minutes, Some(148));
        assert_eq!(entry.imdb_rating, Some(8.8));
    }

    #[test]
    fn test_confirm_rating_clamps_to_ten() {
        let mut controller = SelectionController::new();
        controller.select("tt1");
        controller.finish_detail("tt1", Ok(create_detail("tt1")));

        let entry = controller.confirm_rating(12).unwrap();
        assert_eq!(entry.user_rating, 10);
    }

    #[test]
    fn test_close_clears_everything() {
        let mut controller = SelectionController::new();
        let token = match controller.select("tt1") {
            SelectDispatch::Fetch { token, .. } => token,
            SelectDispatch::None => panic!("expected fetch"),
        };
        controller.close();

        assert!(token.is_cancelled());
        assert_eq!(controller.selected(), None);
        assert!(controller.detail().is_none());
    }
}
