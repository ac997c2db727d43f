//! Parley server library logic.

pub mod api_agents;
pub mod api_conversations;
pub mod api_pages;
pub mod api_profile;
pub mod api_transcript;
pub mod config;
pub mod error;
pub mod middleware;

use axum::{
    routing::{delete, get, patch, post},
    Extension, Json, Router,
};
use parley_access::AccessPolicy;
use parley_analysis::Summarizer;
use parley_catalog::{AgentStore, VoicePlatform};
use parley_identity::IdentityProvider;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// External identity provider.
    pub identity: Arc<dyn IdentityProvider>,
    /// Summarization backend for transcript analysis. `None` when no
    /// completion credential is configured; the batch endpoint reports that
    /// as a server configuration error.
    pub summarizer: Option<Arc<dyn Summarizer>>,
    /// External voice platform (agents, conversations).
    pub platform: Arc<dyn VoicePlatform>,
    /// In-memory store of user-created agents.
    pub store: AgentStore,
    /// Permission policy: default pages and ownership tables.
    pub access: AccessPolicy,
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/api/transcript/process",
            post(api_transcript::process_transcript_handler),
        )
        .route(
            "/api/transcript/blocks",
            get(api_transcript::get_blocks_handler),
        )
        .route("/api/pages", get(api_pages::get_pages_handler))
        .route("/api/profile", get(api_profile::get_profile_handler))
        .route(
            "/api/profile/metadata",
            patch(api_profile::update_metadata_handler),
        )
        .route("/api/agents/create", post(api_agents::create_agent_handler))
        .route("/api/agents/list", get(api_agents::list_agents_handler))
        .route(
            "/api/agents/conversations",
            get(api_conversations::list_conversations_handler),
        )
        .route(
            "/api/agents/{agentId}",
            delete(api_agents::delete_agent_handler),
        )
        .layer(axum::middleware::from_fn(middleware::auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
