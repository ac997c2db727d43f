//! HTTP client for the external voice platform's REST API.

use crate::CatalogError;
use async_trait::async_trait;
use parley_types::ConversationPage;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

/// Timeout for voice platform requests.
const PLATFORM_TIMEOUT: Duration = Duration::from_secs(30);

fn default_base_url() -> String {
    "https://api.elevenlabs.io/v1".to_string()
}

/// Connection settings for the voice platform.
#[derive(Clone, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Agent settings sent to the platform on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentCreateConfig {
    pub name: Option<String>,
    #[serde(rename = "systemPrompt")]
    pub system_prompt: Option<String>,
    #[serde(rename = "firstMessage")]
    pub first_message: Option<String>,
    pub language: Option<String>,
}

impl AgentCreateConfig {
    /// Builds the platform's nested agent-creation body.
    fn to_platform_body(&self) -> Value {
        let mut agent = serde_json::Map::new();
        if let Some(first_message) = &self.first_message {
            agent.insert("first_message".into(), json!(first_message));
        }
        if let Some(prompt) = &self.system_prompt {
            agent.insert("prompt".into(), json!({ "prompt": prompt }));
        }
        if let Some(language) = &self.language {
            agent.insert("language".into(), json!(language));
        }

        let mut body = serde_json::Map::new();
        if let Some(name) = &self.name {
            body.insert("name".into(), json!(name));
        }
        let conversation_config = if agent.is_empty() {
            json!({})
        } else {
            json!({ "agent": agent })
        };
        body.insert("conversation_config".into(), conversation_config);
        Value::Object(body)
    }
}

/// The seam in front of the external voice platform.
#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Lists conversations for the given agents, paginated by cursor.
    async fn list_conversations(
        &self,
        agent_ids: &[String],
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ConversationPage, CatalogError>;

    /// Creates an agent and returns its platform id.
    async fn create_agent(&self, config: &AgentCreateConfig) -> Result<String, CatalogError>;

    /// Deletes an agent by platform id.
    async fn delete_agent(&self, agent_id: &str) -> Result<(), CatalogError>;
}

/// [`VoicePlatform`] backed by the platform's REST API.
#[derive(Debug, Clone)]
pub struct VoicePlatformClient {
    http: reqwest::Client,
    config: PlatformConfig,
}

impl VoicePlatformClient {
    pub fn new(config: PlatformConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(PLATFORM_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    fn require_credential(&self) -> Result<&str, CatalogError> {
        let key = self.config.api_key.trim();
        if key.is_empty() {
            return Err(CatalogError::MissingCredential);
        }
        Ok(key)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "voice platform rejected request");
            return Err(CatalogError::Platform {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl VoicePlatform for VoicePlatformClient {
    async fn list_conversations(
        &self,
        agent_ids: &[String],
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ConversationPage, CatalogError> {
        let key = self.require_credential()?;

        let mut params: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor.to_string()));
        }
        if !agent_ids.is_empty() {
            params.push(("agent_ids", agent_ids.join(",")));
        }

        let response = self
            .http
            .get(self.url("/convai/conversations"))
            .header("xi-api-key", key)
            .query(&params)
            .send()
            .await?;
        let response = Self::check(response).await?;

        response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))
    }

    async fn create_agent(&self, config: &AgentCreateConfig) -> Result<String, CatalogError> {
        let key = self.require_credential()?;

        let response = self
            .http
            .post(self.url("/convai/agents/create"))
            .header("xi-api-key", key)
            .json(&config.to_platform_body())
            .send()
            .await?;
        let response = Self::check(response).await?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;
        payload["agent_id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| CatalogError::MalformedResponse("missing agent_id".to_string()))
    }

    async fn delete_agent(&self, agent_id: &str) -> Result<(), CatalogError> {
        let key = self.require_credential()?;

        let response = self
            .http
            .delete(self.url(&format!("/convai/agents/{agent_id}")))
            .header("xi-api-key", key)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
