pub mod app;
pub mod selection;
pub mod session;
pub mod watchlist;

pub use app::App;
pub use selection::{SelectDispatch, SelectionController};
pub use session::{QueryDispatch, SearchPhase, SearchSession, SessionState, NO_RESULTS_MESSAGE};
pub use watchlist::WatchlistStore;
