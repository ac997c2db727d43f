//! Conversation records as returned by the external voice platform.

use serde::{Deserialize, Serialize};

/// One conversation held with a voice agent on the external platform.
///
/// Field names match the platform's snake_case wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversation_id: String,
    pub agent_id: String,
    /// Display name resolved from the caller's agent records; the platform
    /// itself does not return one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub start_time_unix_secs: i64,
    #[serde(default)]
    pub call_duration_secs: i64,
    #[serde(default)]
    pub message_count: u32,
    #[serde(default)]
    pub status: String,
}

/// One page of the platform's paginated conversation listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationPage {
    #[serde(default)]
    pub conversations: Vec<ConversationRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
