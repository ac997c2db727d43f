use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Batch precondition: the transcript is missing or blank.
    #[error("transcript is required")]
    EmptyTranscript,

    /// Batch precondition: no completion API credential is configured.
    #[error("completion API key is not configured")]
    MissingCredential,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API error: {status}: {body}")]
    Completion { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
