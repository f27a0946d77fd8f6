// file: src/models/session.rs
// description: the last search of a browsing session, as kept by the session cache
// reference: internal data structures

use super::search_result::{ResultItem, SearchResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSession {
    pub query: String,
    pub results: Vec<ResultItem>,
    /// Rounded to two decimals
    pub elapsed_time_seconds: f64,
}

impl CachedSession {
    pub fn new(query: String, results: Vec<ResultItem>, elapsed_time_seconds: f64) -> Self {
        Self {
            query,
            results,
            elapsed_time_seconds,
        }
    }

    pub fn from_response(query: &str, response: SearchResponse) -> Self {
        let elapsed_time_seconds = response.elapsed_seconds();
        Self {
            query: query.to_string(),
            results: response.results,
            elapsed_time_seconds,
        }
    }
}
