use thiserror::Error;

/// Why the remote listings could not be used. Every variant ends in the
/// same place: the fallback dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Backend URL or anon key is not configured")]
    MissingConfig,

    #[error("Backend URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),

    #[error("Failed to reach backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::MissingConfig => "missing_config",
            LoadError::InvalidUrl(_) => "invalid_url",
            LoadError::Transport(_) => "transport",
            LoadError::Status { .. } => "status",
            LoadError::MalformedBody(_) => "malformed_body",
        }
    }
}
