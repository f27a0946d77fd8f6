// file: src/api/client.rs
// description: shared HTTP plumbing for the search backend
// reference: https://docs.rs/reqwest

use crate::config::BackendConfig;
use crate::error::{SearchError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Connection to the search backend. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SearchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single GET attempt, no retries. Transport failures, non-2xx statuses
    /// and undecodable bodies all surface as network errors.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("Failed to reach {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(|e| {
            SearchError::Network(format!("Failed to decode response from {}: {}", url, e))
        })
    }
}
