//! Authentication middleware.

use crate::{error::ApiError, AppState};
use axum::{body::Body, http::Request, middleware::Next, response::Response};
use parley_identity::Identity;
use parley_types::PageAccess;
use std::sync::Arc;

/// The resolved identity stored in request extensions, together with the
/// session token it was resolved from (needed to write metadata back
/// through the provider).
#[derive(Clone, Debug)]
pub struct IdentityContext {
    pub token: String,
    pub identity: Identity,
}

/// Middleware authenticating requests via `Authorization: Bearer <token>`.
///
/// The token is resolved through the identity provider; resolution is a
/// single one-shot lookup per request. A missing or unresolvable token ends
/// the request with 401 and a sign-in redirect hint; provider/transport
/// failures surface as 500 rather than 401 so an outage is not mistaken for
/// a revoked session.
pub async fn auth_middleware(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|val| val.to_str().ok())
        .and_then(|val| val.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or(ApiError::Unauthenticated)?;

    let state = req
        .extensions()
        .get::<Arc<AppState>>()
        .cloned()
        .ok_or_else(|| ApiError::InternalServerError("app state missing".to_string()))?;

    let identity = state
        .identity
        .resolve(&token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "identity provider lookup failed");
            ApiError::InternalServerError("identity provider unavailable".to_string())
        })?
        .ok_or(ApiError::Unauthenticated)?;

    req.extensions_mut()
        .insert(IdentityContext { token, identity });

    Ok(next.run(req).await)
}

/// Denies the request unless the caller holds the required page.
pub fn ensure_page_access(
    state: &AppState,
    ctx: &IdentityContext,
    page: PageAccess,
) -> Result<(), ApiError> {
    if state
        .access
        .has_page_access(&ctx.identity.metadata, page)
    {
        Ok(())
    } else {
        tracing::warn!(user = %ctx.identity.id, page = %page, "page access denied");
        Err(ApiError::Forbidden(
            "You don't have permission to access this page. Please contact your administrator."
                .to_string(),
        ))
    }
}
