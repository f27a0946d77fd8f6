// file: src/pipeline/mod.rs
// description: search flow orchestration module exports
// reference: internal module structure

pub mod controller;
pub mod sequencer;

pub use controller::{SearchController, SearchOutcome};
pub use sequencer::{RequestSequencer, RequestTicket};
