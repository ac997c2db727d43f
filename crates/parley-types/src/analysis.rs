//! Transcript-analysis data shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named (prompt, result) pair in the transcript-analysis pipeline.
///
/// Blocks are session-local: built-in blocks ship with the application and
/// user-authored ones live only in memory for the duration of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBlock {
    /// Unique key; doubles as the section key in a [`ProcessedResult`].
    pub key: String,
    pub title: String,
    pub description: String,
    /// The instruction sent to the summarization call for this block.
    pub prompt: String,
    pub enabled: bool,
    /// Whether the block was authored by the user rather than built in.
    #[serde(default)]
    pub custom: bool,
}

impl AnalysisBlock {
    /// The (key, prompt) pair the processor consumes.
    pub fn to_request(&self) -> BlockRequest {
        BlockRequest {
            key: self.key.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

/// The processor's per-block input: a key unique within the call and the
/// prompt to run against the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub key: String,
    pub prompt: String,
}

/// One completed analysis run.
///
/// Immutable once produced and discarded on "new analysis". Section keys are
/// serialized flat, next to `timestamp` and `originalTranscript`, matching
/// the batch endpoint's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResult {
    /// Block key → produced text (or the error sentinel for failed blocks).
    #[serde(flatten)]
    pub sections: BTreeMap<String, String>,
    /// When the batch settled.
    pub timestamp: DateTime<Utc>,
    /// Copy of the transcript the batch was run against.
    #[serde(rename = "originalTranscript")]
    pub original_transcript: String,
}
