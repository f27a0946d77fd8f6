// file: src/models/search_result.rs
// description: Ranked search results and the backend search response
// reference: GET /search response body

use crate::utils::Validator;
use serde::{Deserialize, Serialize};

/// One ranked hit. Position in the containing sequence is the rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Document number, unique within a response
    pub docno: String,

    pub headline: String,

    /// Publication date as reported by the backend
    pub date: String,

    /// Short excerpt shown in the listing
    pub snippet: String,
}

impl ResultItem {
    pub fn new(docno: String, headline: String, date: String, snippet: String) -> Self {
        Self {
            docno,
            headline,
            date,
            snippet,
        }
    }

    /// Format as a listing entry, cutting the snippet at `max_snippet_len` characters
    pub fn format_summary(&self, rank: usize, max_snippet_len: usize) -> String {
        let snippet = Validator::truncate_text(&self.snippet, max_snippet_len);

        format!(
            "{}. {} [{}]\n   {}\n   {}\n",
            rank + 1,
            self.headline,
            self.docno,
            self.date,
            snippet
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Backend rank order, never reordered or truncated by the client
    pub results: Vec<ResultItem>,

    /// Server-side search duration in milliseconds
    #[serde(rename = "elapsedTime")]
    pub elapsed_time_ms: f64,
}

impl SearchResponse {
    /// Elapsed time in seconds, rounded to two decimals for display and caching
    pub fn elapsed_seconds(&self) -> f64 {
        round_seconds(self.elapsed_time_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

pub(crate) fn round_seconds(elapsed_ms: f64) -> f64 {
    (elapsed_ms / 10.0).round() / 100.0
}
