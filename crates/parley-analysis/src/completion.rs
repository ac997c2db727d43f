//! HTTP client for the external completion API.

use crate::processor::Summarizer;
use crate::AnalysisError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

/// Timeout for a single completion request.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_max_output_tokens() -> u32 {
    300
}

/// Settings for the completion API.
#[derive(Clone, Deserialize)]
pub struct CompletionConfig {
    /// API key. An empty key means the credential is not configured; the
    /// batch endpoint refuses to start a batch in that case.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Output cap per block, bounding latency and cost.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl CompletionConfig {
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

/// [`Summarizer`] backed by the completion API's messages endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Summarizer for CompletionClient {
    async fn summarize(&self, transcript: &str, prompt: &str) -> Result<String, AnalysisError> {
        if !self.has_credential() {
            return Err(AnalysisError::MissingCredential);
        }

        let body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_output_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": format!("{prompt}\n\nTranscript:\n{transcript}")
                }
            ]
        });

        let response = self
            .http
            .post(self.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "completion API rejected request");
            return Err(AnalysisError::Completion {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        // The response carries an array of content segments; the produced
        // text is the first segment's `text` field.
        payload["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("missing content[0].text".to_string())
            })
    }
}
