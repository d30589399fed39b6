use thiserror::Error;

/// Failure of a single Apply-Config request. Shown in the UI, never fatal.
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("request to proxy failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode config payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("proxy returned status: {0}")]
    Status(String),
}
