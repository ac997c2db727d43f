//! The transcript block processor: concurrent per-block fan-out with
//! sentinel substitution on failure.

use crate::AnalysisError;
use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::join_all;
use parley_types::{BlockRequest, ProcessedResult};
use std::collections::BTreeMap;

/// Placeholder text substituted for a block whose external call failed.
pub const BLOCK_ERROR_SENTINEL: &str = "Error processing this block";

/// A single request/response summarization call against the external
/// completion API.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str, prompt: &str) -> Result<String, AnalysisError>;
}

/// Runs every block's prompt against the transcript and collects the
/// results keyed by block.
///
/// All calls are issued concurrently; there is no ordering dependency
/// between blocks and no concurrency cap beyond the block count itself
/// (blocks are user-curated and small, and the calls are I/O-bound). The
/// function returns only after every call settles. A per-block failure is
/// recovered locally by substituting [`BLOCK_ERROR_SENTINEL`] for that
/// block's text; it never aborts sibling calls or the batch.
///
/// A blank transcript fails the batch before any call is issued. Results
/// are not memoized: identical inputs issue independent batches. Once
/// issued, a batch cannot be cancelled; the processor enforces no timeout
/// of its own beyond whatever the underlying client applies.
pub async fn process_blocks<S: Summarizer + ?Sized>(
    summarizer: &S,
    transcript: &str,
    blocks: &[BlockRequest],
) -> Result<ProcessedResult, AnalysisError> {
    if transcript.trim().is_empty() {
        return Err(AnalysisError::EmptyTranscript);
    }

    let calls = blocks.iter().map(|block| async move {
        match summarizer.summarize(transcript, &block.prompt).await {
            Ok(text) => (block.key.clone(), text),
            Err(e) => {
                tracing::error!(block = %block.key, error = %e, "block processing failed");
                (block.key.clone(), BLOCK_ERROR_SENTINEL.to_string())
            }
        }
    });

    let sections: BTreeMap<String, String> = join_all(calls).await.into_iter().collect();

    Ok(ProcessedResult {
        sections,
        timestamp: Utc::now(),
        original_transcript: transcript.to_string(),
    })
}
