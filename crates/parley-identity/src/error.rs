use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identity provider error: {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("malformed identity payload: {0}")]
    Malformed(String),

    #[error("invalid identity configuration: {0}")]
    Config(String),
}
