use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("vision service rejected the request: {0}")]
    ServiceSubmission(String),
    #[error("text recognition failed: {0}")]
    RecognitionFailed(String),
    #[error("text recognition did not finish after {attempts} polls")]
    RecognitionTimeout { attempts: u32 },
    #[error("vision service returned no captions")]
    DescriptionEmpty,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response from vision service: {0}")]
    InvalidResponse(String),
}

/// OCR: image in, recognized text out (lines separated by newlines).
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize_text(&self, image_path: &Path) -> Result<String, VisionError>;
}

/// Captioning: image in, one short description out.
#[async_trait]
pub trait ImageDescriber: Send + Sync {
    async fn describe_image(&self, image_path: &Path) -> Result<String, VisionError>;
}
