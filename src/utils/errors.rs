use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Source code not verified or not available")]
    SourceUnavailable,

    #[error("Explorer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
