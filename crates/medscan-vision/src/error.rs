use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the vision client.
#[derive(Debug, Error)]
pub enum VisionError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from vision endpoint: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image type for {path}: expected jpg, jpeg, or png")]
    UnsupportedImage { path: PathBuf },

    #[error("image {path} is empty")]
    EmptyImage { path: PathBuf },

    /// The image bytes could not be decoded for barcode scanning.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] ::image::ImageError),
}
