// file: src/api/article.rs
// description: raw document retrieval by document number
// reference: GET /article?docno=<docno>

use super::client::BackendClient;
use crate::error::{SearchError, Result};
use crate::utils::Validator;
use serde::Deserialize;
use tracing::debug;

pub const ARTICLE_ENDPOINT: &str = "article";

#[derive(Debug, Deserialize)]
struct ArticleBody {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArticleClient {
    backend: BackendClient,
}

impl ArticleClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Fetch the tagged document body for `docno`. A 404, or a reply with
    /// no content, means the backend has no such document.
    pub async fn fetch_raw_document(&self, docno: &str) -> Result<String> {
        Validator::validate_docno(docno)?;

        let body: ArticleBody = match self
            .backend
            .get_json(ARTICLE_ENDPOINT, &[("docno", docno)])
            .await
        {
            Err(SearchError::Status { status: 404, .. }) => {
                return Err(SearchError::NotFound(docno.to_string()));
            }
            other => other?,
        };

        match body.content {
            Some(content) if !content.trim().is_empty() => {
                debug!("Fetched document {} ({} bytes)", docno, content.len());
                Ok(content)
            }
            _ => Err(SearchError::NotFound(docno.to_string())),
        }
    }
}
