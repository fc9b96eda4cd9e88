use thiserror::Error;

/// Tagged outcome of a remote fetch. The client never panics or leaks
/// transport errors past this boundary; the session controller decides
/// which variants become user-visible.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Superseded by a newer request. Silent: must never set an error
    /// state visible to the user.
    #[error("request superseded")]
    Aborted,

    /// The service answered with an explicit no-results indicator.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure, non-200 status, or an unparseable body.
    #[error("{0}")]
    Network(String),
}

impl FetchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
