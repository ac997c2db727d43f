//! The built-in analysis block catalog.
//!
//! Blocks are session-local: this catalog seeds a session, and user-authored
//! blocks are added, edited, and deleted in memory only.

use parley_types::{AnalysisBlock, BlockRequest};

fn block(key: &str, title: &str, description: &str, prompt: &str, enabled: bool) -> AnalysisBlock {
    AnalysisBlock {
        key: key.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        prompt: prompt.to_string(),
        enabled,
        custom: false,
    }
}

/// The built-in blocks, with their default prompts and enabled flags.
pub fn default_blocks() -> Vec<AnalysisBlock> {
    vec![
        block(
            "summary",
            "Executive Summary",
            "Key points from conversation",
            "List 3 key points from this conversation. One short line each:\n- Point 1\n- Point 2\n- Point 3",
            true,
        ),
        block(
            "agenda",
            "Meeting Agenda",
            "Topics discussed",
            "List top 3 topics discussed. One line each:\n- Topic 1\n- Topic 2\n- Topic 3",
            true,
        ),
        block(
            "participants",
            "Participants",
            "People mentioned",
            "List people mentioned (max 3). Format: Name - Role (5 words max each)",
            false,
        ),
        block(
            "goals",
            "Goals",
            "Objectives discussed",
            "List 3 main goals. One line each, under 10 words per goal.",
            true,
        ),
        block(
            "challenges",
            "Challenges",
            "Problems identified",
            "List 3 main problems. One line each, under 10 words.",
            true,
        ),
        block(
            "actionItems",
            "Action Items",
            "Next steps",
            "List 3 next steps. One line each, under 10 words.",
            true,
        ),
        block(
            "feedback",
            "Feedback",
            "Feedback points",
            "List 3 feedback points. One line each, under 10 words.",
            false,
        ),
        block(
            "meetingNeed",
            "Meeting Decision",
            "Should a meeting happen?",
            "Should a meeting happen? Answer: YES/NO - reason (one line only)",
            true,
        ),
    ]
}

/// The (key, prompt) requests for the enabled blocks, in catalog order.
pub fn enabled_requests(blocks: &[AnalysisBlock]) -> Vec<BlockRequest> {
    blocks
        .iter()
        .filter(|b| b.enabled)
        .map(AnalysisBlock::to_request)
        .collect()
}
