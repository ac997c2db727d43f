//! Transcript analysis for the Parley platform.
//!
//! Given a raw transcript and a set of (key, prompt) blocks, the processor
//! issues one external summarization call per block concurrently and
//! collects the results keyed by block. A failed block is replaced with a
//! fixed sentinel string and never aborts its siblings, so the caller gets
//! N-1 good sections rather than zero when one prompt trips a provider
//! error.

mod blocks;
mod completion;
mod error;
mod processor;

pub use blocks::{default_blocks, enabled_requests};
pub use completion::{CompletionClient, CompletionConfig};
pub use error::AnalysisError;
pub use processor::{process_blocks, Summarizer, BLOCK_ERROR_SENTINEL};
