// file: src/session/cache.rs
// description: last-search cache restoring the result view without a backend call
// reference: Production-grade metadata persistence

use super::store::SessionStore;
use crate::error::{SearchError, Result};
use crate::models::{CachedSession, ResultItem};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const QUERY_KEY: &str = "last_query";
pub const RESULTS_KEY: &str = "last_results";
pub const ELAPSED_KEY: &str = "last_elapsed_time";

const SESSION_KEYS: [&str; 3] = [QUERY_KEY, RESULTS_KEY, ELAPSED_KEY];

/// Owns the single [`CachedSession`] slot of a browsing session.
pub struct SessionCache<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the cached session. All three entries are serialized before
    /// anything is written, then handed to the store as one write.
    pub fn persist(&self, session: &CachedSession) -> Result<()> {
        let entries = [
            (QUERY_KEY, encode(&session.query)?),
            (RESULTS_KEY, encode(&session.results)?),
            (ELAPSED_KEY, encode(&session.elapsed_time_seconds)?),
        ];

        self.store.write(&entries)?;

        debug!(
            "Cached session for query {:?} with {} results",
            session.query,
            session.results.len()
        );
        Ok(())
    }

    /// The last persisted session, or `None` when the store is empty,
    /// incomplete, unreadable or corrupt.
    pub fn load(&self) -> Option<CachedSession> {
        match self.try_load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring cached session: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    fn try_load(&self) -> Result<Option<CachedSession>> {
        let values = self.store.read(&SESSION_KEYS)?;

        let [Some(query), Some(results), Some(elapsed)] = <[Option<String>; 3]>::try_from(values)
            .map_err(|_| SearchError::CacheCorruption("store returned wrong key count".into()))?
        else {
            debug!("No complete cached session");
            return Ok(None);
        };

        Ok(Some(CachedSession {
            query: decode::<String>(QUERY_KEY, &query)?,
            results: decode::<Vec<ResultItem>>(RESULTS_KEY, &results)?,
            elapsed_time_seconds: decode::<f64>(ELAPSED_KEY, &elapsed)?,
        }))
    }
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| SearchError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| SearchError::CacheCorruption(format!("entry {}: {}", key, e)))
}
