use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The voice-platform API key is not configured.
    #[error("voice platform API key is not configured")]
    MissingCredential,

    #[error("voice platform request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("voice platform error: {status}: {body}")]
    Platform { status: u16, body: String },

    #[error("malformed voice platform response: {0}")]
    MalformedResponse(String),

    #[error("agent not found: {0}")]
    AgentNotFound(String),
}
