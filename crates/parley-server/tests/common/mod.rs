//! Shared fakes and state builders for server integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use parley_access::AccessPolicy;
use parley_analysis::{AnalysisError, Summarizer};
use parley_catalog::{AgentCreateConfig, AgentStore, CatalogError, VoicePlatform};
use parley_identity::{Identity, IdentityError, IdentityProvider};
use parley_server::AppState;
use parley_types::{ConversationPage, MetadataPatch, PageAccess, UserMetadata};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Identity provider backed by a token → identity map.
#[derive(Default)]
pub struct FakeIdentityProvider {
    users: Mutex<HashMap<String, Identity>>,
}

impl FakeIdentityProvider {
    pub fn with_user(self, token: &str, identity: Identity) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(token.to_string(), identity);
        self
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn resolve(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        Ok(self.users.lock().unwrap().get(token).cloned())
    }

    async fn update_metadata(
        &self,
        token: &str,
        patch: &MetadataPatch,
    ) -> Result<UserMetadata, IdentityError> {
        let mut users = self.users.lock().unwrap();
        let identity = users.get_mut(token).ok_or(IdentityError::Provider {
            status: 401,
            body: "unauthenticated".to_string(),
        })?;
        identity.metadata = patch.apply(&identity.metadata);
        Ok(identity.metadata.clone())
    }
}

/// Summarizer that echoes the prompt and fails on prompts containing
/// "fail". Counts every call it receives.
#[derive(Default)]
pub struct FakeSummarizer {
    calls: AtomicUsize,
}

impl FakeSummarizer {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, _transcript: &str, prompt: &str) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("fail") {
            return Err(AnalysisError::Completion {
                status: 500,
                body: "provider error".to_string(),
            });
        }
        Ok(format!("result for {prompt}"))
    }
}

/// Voice platform serving a canned conversation page and recording calls.
#[derive(Default)]
pub struct FakePlatform {
    pub page: Mutex<ConversationPage>,
    pub list_calls: AtomicUsize,
    pub last_listed_agents: Mutex<Vec<String>>,
    pub last_limit: AtomicUsize,
    pub created: Mutex<Vec<AgentCreateConfig>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_delete: bool,
}

#[async_trait]
impl VoicePlatform for FakePlatform {
    async fn list_conversations(
        &self,
        agent_ids: &[String],
        _cursor: Option<&str>,
        limit: u32,
    ) -> Result<ConversationPage, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.last_limit.store(limit as usize, Ordering::SeqCst);
        *self.last_listed_agents.lock().unwrap() = agent_ids.to_vec();
        Ok(self.page.lock().unwrap().clone())
    }

    async fn create_agent(&self, config: &AgentCreateConfig) -> Result<String, CatalogError> {
        let mut created = self.created.lock().unwrap();
        created.push(config.clone());
        Ok(format!("agent_fake_{}", created.len()))
    }

    async fn delete_agent(&self, agent_id: &str) -> Result<(), CatalogError> {
        self.deleted.lock().unwrap().push(agent_id.to_string());
        if self.fail_delete {
            return Err(CatalogError::Platform {
                status: 404,
                body: "unknown agent".to_string(),
            });
        }
        Ok(())
    }
}

/// An authenticated identity holding the given pages.
pub fn identity(id: &str, email: Option<&str>, pages: &[PageAccess]) -> Identity {
    Identity {
        id: id.to_string(),
        primary_email: email.map(str::to_string),
        display_name: None,
        metadata: UserMetadata {
            allowed_pages: Some(pages.to_vec()),
            ..UserMetadata::default()
        },
    }
}

/// App state wired to the given fakes.
pub fn state(
    provider: Arc<FakeIdentityProvider>,
    summarizer: Option<Arc<FakeSummarizer>>,
    platform: Arc<FakePlatform>,
) -> AppState {
    AppState {
        identity: provider,
        summarizer: summarizer.map(|s| s as Arc<dyn Summarizer>),
        platform,
        store: AgentStore::new(),
        access: AccessPolicy::default(),
    }
}

/// Request builder with a bearer token and an optional JSON body.
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Reads a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
