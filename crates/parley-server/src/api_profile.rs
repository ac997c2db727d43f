//! Profile handlers: identity summary and metadata updates.

use crate::{error::ApiError, middleware::IdentityContext, AppState};
use axum::{extract::Extension, Json};
use parley_types::{MetadataPatch, UserMetadata};
use serde::Serialize;
use std::sync::Arc;

/// Response body for `GET /api/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    #[serde(rename = "primaryEmail")]
    pub primary_email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Name used for greetings: metadata name, else the email local part.
    #[serde(rename = "greetingName")]
    pub greeting_name: Option<String>,
    pub metadata: UserMetadata,
}

/// Handler for `GET /api/profile`.
pub async fn get_profile_handler(
    Extension(ctx): Extension<IdentityContext>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = ctx.identity;
    Ok(Json(ProfileResponse {
        greeting_name: identity.greeting_name(),
        id: identity.id,
        primary_email: identity.primary_email,
        display_name: identity.display_name,
        metadata: identity.metadata,
    }))
}

/// Handler for `PATCH /api/profile/metadata`.
///
/// Merges the patch into the stored metadata through the provider's update
/// API. The merge is read-full/write-full and last-writer-wins; two tabs
/// updating concurrently can silently drop one side's change.
pub async fn update_metadata_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
    Json(patch): Json<MetadataPatch>,
) -> Result<Json<UserMetadata>, ApiError> {
    let updated = state
        .identity
        .update_metadata(&ctx.token, &patch)
        .await
        .map_err(|e| {
            tracing::error!(user = %ctx.identity.id, error = %e, "metadata update failed");
            ApiError::InternalServerError("failed to update metadata".to_string())
        })?;

    Ok(Json(updated))
}
