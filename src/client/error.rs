use reqwest::StatusCode;
use std::path::PathBuf;

/// Why an upload failed. Only logged, the UI shows one fixed message for all of them.
#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid mime type {mime}: {source}")]
    InvalidMime {
        mime: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upload failed with status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse upload response: {0}")]
    Decode(#[from] serde_json::Error),
}
