use movie_rate_models::{MovieDetail, SearchResult};
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::{OmdbDetailResponse, OmdbSearchResponse};
use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Thin client over the OMDb HTTP API. Stateless apart from the connection
/// pool; no caching, no retries.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host (tests, or a swapped service
    /// speaking the same wire format).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Free-text title search. An empty or whitespace query short-circuits
    /// to an empty result set without touching the network.
    ///
    /// The token is the supersession handle: when a newer search starts it
    /// cancels this one, which surfaces as `FetchError::Aborted`.
    pub async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}?apikey={}&s={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        debug!(query, "omdb search");

        let body = self.get_cancellable(&url, cancel).await?;
        let response: OmdbSearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Network(e.to_string()))?;
        response.into_results()
    }

    /// By-id detail lookup. Cancellable independently of any search.
    pub async fn fetch_detail(
        &self,
        imdb_id: &str,
        cancel: &CancellationToken,
    ) -> Result<MovieDetail, FetchError> {
        let url = format!(
            "{}?apikey={}&i={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(imdb_id)
        );
        debug!(imdb_id, "omdb detail lookup");

        let body = self.get_cancellable(&url, cancel).await?;
        let response: OmdbDetailResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Network(e.to_string()))?;
        response.into_detail()
    }

    /// GET the URL, racing the whole request (including body download)
    /// against the cancellation token.
    async fn get_cancellable(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<String, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Aborted);
        }

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(FetchError::Aborted),
            response = self.client.get(url).send() => response?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "omdb returned HTTP {}",
                status
            )));
        }

        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(FetchError::Aborted),
            body = response.text() => body?,
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_short_circuits_without_request() {
        // Unroutable base URL: any network attempt would fail, so an Ok
        // here proves no request was issued.
        let client = OmdbClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:1/".to_string(),
        );
        let token = CancellationToken::new();

        let results = client.search("", &token).await.unwrap();
        assert!(results.is_empty());

        let results = client.search("   ", &token).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_aborts_before_sending() {
        let client = OmdbClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:1/".to_string(),
        );
        let token = CancellationToken::new();
        token.cancel();

        let err = client.search("batman", &token).await.unwrap_err();
        assert!(err.is_aborted());

        let err = client.fetch_detail("tt1375666", &token).await.unwrap_err();
        assert!(err.is_aborted());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let client = OmdbClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:1/".to_string(),
        );
        let token = CancellationToken::new();

        let err = client.search("batman", &token).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.is_aborted());
    }
}
