// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod session;
pub mod utils;

pub use api::{ArticleClient, BackendClient, QueryClient};
pub use config::{BackendConfig, Config, DisplayConfig, SessionConfig};
pub use error::{ParseError, Result, SearchError};
pub use models::{Article, CachedSession, ResultItem, ResultListing, SearchResponse};
pub use parser::{DocumentParser, TaggedDocumentParser};
pub use pipeline::{RequestSequencer, RequestTicket, SearchController, SearchOutcome};
pub use session::{FileSessionStore, MemorySessionStore, SessionCache, SessionStore};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let backend = BackendClient::new(&config.backend).unwrap();
        let _controller = SearchController::new(
            QueryClient::new(backend.clone()),
            ArticleClient::new(backend),
            TaggedDocumentParser::new(),
            SessionCache::new(MemorySessionStore::new()),
        );
    }
}
