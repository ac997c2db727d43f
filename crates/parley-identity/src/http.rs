//! HTTP implementation of [`IdentityProvider`].

use crate::{Identity, IdentityError, IdentityProvider};
use async_trait::async_trait;
use parley_types::{MetadataPatch, UserMetadata};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Timeout for identity provider requests.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the external identity provider.
#[derive(Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider's REST API.
    #[serde(default)]
    pub base_url: String,
    /// Server-side API key for metadata writes.
    #[serde(default)]
    pub server_key: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("server_key", &"[REDACTED]")
            .finish()
    }
}

/// The provider's current-user payload.
#[derive(Debug, Deserialize)]
struct CurrentUserPayload {
    id: String,
    primary_email: Option<String>,
    display_name: Option<String>,
    #[serde(default)]
    client_metadata: Value,
}

impl CurrentUserPayload {
    fn into_identity(self) -> Identity {
        let metadata = UserMetadata::from_value(&self.client_metadata);
        Identity {
            id: self.id,
            primary_email: self.primary_email,
            display_name: self.display_name,
            metadata,
        }
    }
}

/// [`IdentityProvider`] backed by the provider's REST API.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl HttpIdentityProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, IdentityError> {
        if config.base_url.trim().is_empty() {
            return Err(IdentityError::Config(
                "identity provider base_url is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    fn me_url(&self) -> String {
        format!("{}/api/v1/users/me", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        let response = self
            .http
            .get(self.me_url())
            .header("x-access-token", token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "identity provider rejected lookup");
            return Err(IdentityError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CurrentUserPayload = response
            .json()
            .await
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;
        Ok(Some(payload.into_identity()))
    }

    async fn update_metadata(
        &self,
        token: &str,
        patch: &MetadataPatch,
    ) -> Result<UserMetadata, IdentityError> {
        // Read full record, merge the patch, write the full record back.
        // Last writer wins; the provider offers no conditional update.
        let current = self.resolve(token).await?.ok_or(IdentityError::Provider {
            status: 401,
            body: "unauthenticated".to_string(),
        })?;

        let merged = patch.apply(&current.metadata);

        let response = self
            .http
            .patch(self.me_url())
            .header("x-access-token", token)
            .header("x-server-key", &self.config.server_key)
            .json(&serde_json::json!({ "client_metadata": merged.to_value() }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(user = %current.id, "updated user metadata");
        Ok(merged)
    }
}
