// file: src/parser/mod.rs
// description: document parsing module exports
// reference: internal module structure

pub mod tagged;

pub use tagged::TaggedDocumentParser;

use crate::error::Result;
use crate::models::Article;

/// Turns a raw document body into an [`Article`].
///
/// Implementations are pure: the same input always yields the same article
/// or the same error, and a failure never yields a partially filled article.
pub trait DocumentParser {
    fn parse(&self, raw: &str) -> Result<Article>;
}
