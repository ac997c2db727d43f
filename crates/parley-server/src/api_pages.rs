//! Page catalog handlers: the caller's derived permission record.

use crate::{error::ApiError, middleware::IdentityContext, AppState};
use axum::{extract::Extension, Json};
use parley_catalog::persona;
use parley_types::PageAccess;
use serde::Serialize;
use std::sync::Arc;

/// One page entry with its display configuration.
#[derive(Debug, Serialize)]
pub struct PageEntry {
    pub page: PageAccess,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<&'static str>,
}

impl PageEntry {
    fn for_page(page: PageAccess) -> Self {
        let config = persona(page);
        Self {
            page,
            display_name: config.display_name,
            agent_id: config.agent_id,
        }
    }
}

/// Response body for `GET /api/pages`.
#[derive(Debug, Serialize)]
pub struct PagesResponse {
    /// Pages the caller owns (their persona, personal tools, overrides).
    pub owned: Vec<PageEntry>,
    /// Shared pages the caller may open but does not own.
    pub other: Vec<PageEntry>,
}

/// Handler for `GET /api/pages`.
///
/// The permission record is derived on every read from the caller's
/// metadata; nothing is stored server-side.
pub async fn get_pages_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<IdentityContext>,
) -> Result<Json<PagesResponse>, ApiError> {
    let categories = state.access.categorize(
        &ctx.identity.metadata,
        ctx.identity.primary_email.as_deref(),
    );

    Ok(Json(PagesResponse {
        owned: categories
            .owned
            .into_iter()
            .map(PageEntry::for_page)
            .collect(),
        other: categories
            .other
            .into_iter()
            .map(PageEntry::for_page)
            .collect(),
    }))
}
