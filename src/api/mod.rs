// file: src/api/mod.rs
// description: search backend client module exports
// reference: internal module structure

pub mod article;
pub mod client;
pub mod query;

pub use article::ArticleClient;
pub use client::BackendClient;
pub use query::QueryClient;
