// file: src/session/mod.rs
// description: session cache module exports
// reference: internal module structure

pub mod cache;
pub mod store;

pub use cache::SessionCache;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
