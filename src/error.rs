#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported deck URL: {0}")]
    UnsupportedUrl(String),

    #[error("{service} API returned {status}")]
    Upstream { service: &'static str, status: u16 },

    #[error("Task error: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
