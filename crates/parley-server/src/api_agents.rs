//! Agent CRUD handlers: create on the voice platform, list from the
//! in-memory store, delete from both.

use crate::{error::ApiError, middleware::IdentityContext, AppState};
use axum::{
    extract::{Extension, Path},
    Json,
};
use chrono::Utc;
use parley_catalog::{AgentCreateConfig, AgentRecord};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Response body for `POST /api/agents/create`.
#[derive(Debug, Serialize)]
pub struct CreateAgentResponse {
    pub success: bool,
    /// The platform agent id, which is what clients hand back to the voice
    /// SDK and the conversation listing.
    #[serde(rename = "agentId")]
    pub agent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Handler for `POST /api/agents/create`.
pub async fn create_agent_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
    Json(payload): Json<AgentCreateConfig>,
) -> Result<Json<CreateAgentResponse>, ApiError> {
    let platform_agent_id = state.platform.create_agent(&payload).await.map_err(|e| {
        tracing::error!(user = %ctx.identity.id, error = %e, "agent creation failed");
        ApiError::InternalServerError(e.to_string())
    })?;

    let record = AgentRecord {
        id: Uuid::new_v4(),
        name: payload.name.clone(),
        system_prompt: payload.system_prompt.clone(),
        first_message: payload.first_message.clone(),
        language: payload.language.clone(),
        user_id: ctx.identity.id.clone(),
        platform_agent_id: platform_agent_id.clone(),
        created_at: Utc::now(),
    };
    state.store.insert(record);

    tracing::info!(
        user = %ctx.identity.id,
        agent = %platform_agent_id,
        "created agent"
    );

    Ok(Json(CreateAgentResponse {
        success: true,
        agent_id: platform_agent_id,
        name: payload.name,
    }))
}

/// Response body for `GET /api/agents/list`.
#[derive(Debug, Serialize)]
pub struct AgentListResponse {
    pub agents: Vec<AgentRecord>,
    pub total: usize,
}

/// Handler for `GET /api/agents/list`.
pub async fn list_agents_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
) -> Result<Json<AgentListResponse>, ApiError> {
    let agents = state.store.agents_for_user(&ctx.identity.id);
    let total = agents.len();
    Ok(Json(AgentListResponse { agents, total }))
}

/// Response body for `DELETE /api/agents/{agentId}`.
#[derive(Debug, Serialize)]
pub struct DeleteAgentResponse {
    pub success: bool,
    pub message: String,
}

/// Handler for `DELETE /api/agents/{agentId}`.
///
/// Accepts either the platform agent id or the local record id. Platform
/// deletion failure is logged and local deletion proceeds, so a missing
/// platform-side agent cannot strand the record.
pub async fn delete_agent_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
    Path(agent_id): Path<String>,
) -> Result<Json<DeleteAgentResponse>, ApiError> {
    let record = state
        .store
        .find_for_user(&ctx.identity.id, &agent_id)
        .ok_or_else(|| ApiError::NotFound("Agent not found".to_string()))?;

    if let Err(e) = state.platform.delete_agent(&record.platform_agent_id).await {
        tracing::error!(
            agent = %record.platform_agent_id,
            error = %e,
            "platform agent deletion failed, removing local record anyway"
        );
    }

    let success = state.store.remove(record.id);

    Ok(Json(DeleteAgentResponse {
        success,
        message: "Agent deleted successfully".to_string(),
    }))
}
