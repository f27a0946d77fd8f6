// file: src/pipeline/controller.rs
// description: search and article flows wiring clients, parser and session cache
// reference: application orchestration

use super::sequencer::{RequestSequencer, RequestTicket};
use crate::api::{ArticleClient, QueryClient};
use crate::error::Result;
use crate::models::{Article, CachedSession, SearchResponse};
use crate::parser::DocumentParser;
use crate::session::{SessionCache, SessionStore};
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The response for the latest search, already cached
    Completed(CachedSession),
    /// A newer search was issued while this one was in flight
    Superseded { query: String },
}

pub struct SearchController<S: SessionStore, P: DocumentParser> {
    queries: QueryClient,
    articles: ArticleClient,
    parser: P,
    cache: SessionCache<S>,
    sequencer: RequestSequencer,
    /// Held across the staleness check and the cache write
    commit: Mutex<()>,
}

impl<S: SessionStore, P: DocumentParser> SearchController<S, P> {
    pub fn new(
        queries: QueryClient,
        articles: ArticleClient,
        parser: P,
        cache: SessionCache<S>,
    ) -> Self {
        Self {
            queries,
            articles,
            parser,
            cache,
            sequencer: RequestSequencer::new(),
            commit: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &SessionCache<S> {
        &self.cache
    }

    /// Run a search and cache it. Completions that arrive after a newer
    /// search was started are dropped, whether they succeeded or failed.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let ticket = self.sequencer.begin();
        let response = self.queries.search(query).await;
        self.commit(ticket, query, response)
    }

    /// Check and persist under one lock, so an older completion that passed
    /// the check cannot land in the cache after a newer one.
    fn commit(
        &self,
        ticket: RequestTicket,
        query: &str,
        response: Result<SearchResponse>,
    ) -> Result<SearchOutcome> {
        let _guard = self
            .commit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !self.sequencer.is_current(ticket) {
            warn!(
                "Discarding response #{} for {:?}: a newer search is in flight",
                ticket.sequence(),
                query
            );
            return Ok(SearchOutcome::Superseded {
                query: query.to_string(),
            });
        }

        let session = CachedSession::from_response(query, response?);

        if let Err(e) = self.cache.persist(&session) {
            warn!("Failed to cache search for {:?}: {}", query, e);
        }

        Ok(SearchOutcome::Completed(session))
    }

    /// The last cached search, without touching the network.
    pub fn restore(&self) -> Option<CachedSession> {
        let session = self.cache.load();
        if let Some(ref session) = session {
            info!("Restored cached search for {:?}", session.query);
        }
        session
    }

    pub async fn open_article(&self, docno: &str) -> Result<Article> {
        let raw = self.articles.fetch_raw_document(docno).await?;
        self.parser.parse(&raw)
    }
}
