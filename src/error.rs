use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlInsightsError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[cfg(feature = "openai")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[cfg(feature = "openai")]
    #[error("Provider error (status {status}): {message}")]
    ProviderError { status: u16, message: String },

    #[cfg(feature = "openai")]
    #[error("Completion timed out after {0} seconds")]
    TimeoutError(u64),

    #[cfg(feature = "openai")]
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, PlInsightsError>;
