// file: src/api/query.rs
// description: search requests against the backend ranking service
// reference: GET /search?query=<text>

use super::client::BackendClient;
use crate::error::{SearchError, Result};
use crate::models::SearchResponse;
use tracing::{debug, info};

pub const SEARCH_ENDPOINT: &str = "search";

/// Stateless search client. An empty query is still sent; the backend
/// decides what it means.
#[derive(Debug, Clone)]
pub struct QueryClient {
    backend: BackendClient,
}

impl QueryClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        debug!("Searching for {:?}", query);

        let response: SearchResponse = self
            .backend
            .get_json(SEARCH_ENDPOINT, &[("query", query)])
            .await?;

        if !response.elapsed_time_ms.is_finite() || response.elapsed_time_ms < 0.0 {
            return Err(SearchError::Network(format!(
                "Backend reported invalid elapsed time {}",
                response.elapsed_time_ms
            )));
        }

        info!(
            "Search for {:?} returned {} results in {:.2}s",
            query,
            response.len(),
            response.elapsed_seconds()
        );

        Ok(response)
    }
}
