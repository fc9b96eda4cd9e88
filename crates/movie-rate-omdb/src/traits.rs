use async_trait::async_trait;
use movie_rate_models::{MovieDetail, SearchResult};
use tokio_util::sync::CancellationToken;

use crate::client::OmdbClient;
use crate::error::FetchError;

/// Seam for the remote movie database. The app talks to this trait so the
/// service can be swapped for anything speaking search-by-text plus
/// lookup-by-id, without the controllers knowing the wire format.
#[async_trait]
pub trait MovieDatabase: Send + Sync {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, FetchError>;

    async fn fetch_detail(
        &self,
        imdb_id: &str,
        cancel: &CancellationToken,
    ) -> Result<MovieDetail, FetchError>;
}

#[async_trait]
impl MovieDatabase for OmdbClient {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, FetchError> {
        OmdbClient::search(self, query, cancel).await
    }

    async fn fetch_detail(
        &self,
        imdb_id: &str,
        cancel: &CancellationToken,
    ) -> Result<MovieDetail, FetchError> {
        OmdbClient::fetch_detail(self, imdb_id, cancel).await
    }
}
