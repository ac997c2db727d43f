//! The transcript batch endpoint.

use crate::{
    error::ApiError,
    middleware::{ensure_page_access, IdentityContext},
    AppState,
};
use axum::{extract::Extension, Json};
use parley_analysis::{default_blocks, process_blocks, AnalysisError};
use parley_types::{AnalysisBlock, BlockRequest, PageAccess, ProcessedResult};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for `POST /api/transcript/process`.
#[derive(Debug, Deserialize)]
pub struct ProcessTranscriptRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(rename = "customBlocks", default)]
    pub custom_blocks: Vec<BlockRequest>,
}

/// Handler for `POST /api/transcript/process`.
///
/// Precondition failures (missing transcript, missing completion
/// credential) short-circuit before any external call is issued and are
/// distinguishable by status: 400 for the transcript, 500 for the
/// credential. A failing block never fails the batch; its section carries
/// the sentinel string instead.
pub async fn process_transcript_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
    Json(payload): Json<ProcessTranscriptRequest>,
) -> Result<Json<ProcessedResult>, ApiError> {
    ensure_page_access(&state, &ctx, PageAccess::TranscriptAnalyzer)?;

    let transcript = payload.transcript.unwrap_or_default();
    if transcript.trim().is_empty() {
        return Err(ApiError::BadRequest("Transcript is required".to_string()));
    }

    let Some(summarizer) = &state.summarizer else {
        tracing::error!("transcript analysis requested but no completion credential configured");
        return Err(ApiError::InternalServerError(
            "Server configuration error - API key missing".to_string(),
        ));
    };

    tracing::info!(
        user = %ctx.identity.id,
        transcript_len = transcript.len(),
        blocks = payload.custom_blocks.len(),
        "processing transcript"
    );

    let result = process_blocks(summarizer.as_ref(), &transcript, &payload.custom_blocks)
        .await
        .map_err(|e| match e {
            AnalysisError::EmptyTranscript => {
                ApiError::BadRequest("Transcript is required".to_string())
            }
            AnalysisError::MissingCredential => ApiError::InternalServerError(
                "Server configuration error - API key missing".to_string(),
            ),
            other => ApiError::Unexpected {
                message: "Failed to process transcript".to_string(),
                details: other.to_string(),
            },
        })?;

    Ok(Json(result))
}

/// Handler for `GET /api/transcript/blocks`.
///
/// Serves the built-in block catalog that seeds a client session. Blocks
/// themselves are session-local; nothing the client does to them is stored.
pub async fn get_blocks_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
) -> Result<Json<Vec<AnalysisBlock>>, ApiError> {
    ensure_page_access(&state, &ctx, PageAccess::TranscriptAnalyzer)?;
    Ok(Json(default_blocks()))
}
