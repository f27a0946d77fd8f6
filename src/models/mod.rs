// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod article;
pub mod listing;
pub mod search_result;
pub mod session;

pub use article::Article;
pub use listing::ResultListing;
pub use search_result::{ResultItem, SearchResponse};
pub use session::CachedSession;
