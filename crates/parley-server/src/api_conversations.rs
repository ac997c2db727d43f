//! Conversation listing, proxied to the external voice platform.

use crate::{error::ApiError, middleware::IdentityContext, AppState};
use axum::{
    extract::{Extension, Query},
    Json,
};
use parley_types::ConversationPage;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Query parameters for `GET /api/agents/conversations`.
#[derive(Debug, Deserialize)]
pub struct ConversationsQuery {
    /// Continuation cursor from a previous page.
    pub cursor: Option<String>,
    /// Page size (default: 20, clamped to 1..=100).
    pub limit: Option<u32>,
    /// Comma-separated platform agent ids. Defaults to the caller's stored
    /// agents.
    pub agent_ids: Option<String>,
}

/// Handler for `GET /api/agents/conversations`.
///
/// Returns one page of the caller's conversations, with records enriched
/// with agent display names from the caller's store where known.
pub async fn list_conversations_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
    Query(params): Query<ConversationsQuery>,
) -> Result<Json<ConversationPage>, ApiError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);

    let stored = state.store.agents_for_user(&ctx.identity.id);
    let name_map: HashMap<String, String> = stored
        .iter()
        .filter_map(|agent| {
            agent
                .name
                .clone()
                .map(|name| (agent.platform_agent_id.clone(), name))
        })
        .collect();

    let agent_ids: Vec<String> = match &params.agent_ids {
        Some(ids) => ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        None => stored
            .iter()
            .map(|agent| agent.platform_agent_id.clone())
            .collect(),
    };

    // No agents to query means no conversations; skip the platform call.
    if agent_ids.is_empty() {
        return Ok(Json(ConversationPage::default()));
    }

    let mut page = state
        .platform
        .list_conversations(&agent_ids, params.cursor.as_deref(), limit)
        .await
        .map_err(|e| {
            tracing::error!(user = %ctx.identity.id, error = %e, "conversation listing failed");
            ApiError::InternalServerError(e.to_string())
        })?;

    for conversation in &mut page.conversations {
        if conversation.agent_name.is_none() {
            conversation.agent_name = name_map.get(&conversation.agent_id).cloned();
        }
    }

    Ok(Json(page))
}
