use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Response};
use std::path::Path;
use url::Url;

use super::models::{DescribeResult, ImageDescription, OperationStatus, ReadOperationResult};
use crate::config::VisionConfig;
use crate::providers::traits::{ImageDescriber, TextRecognizer, VisionError};
use crate::providers::utils::{poll_until_done, PollState};

const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION: &str = "Operation-Location";
const READ_PATH: &str = "vision/v3.2/read/analyze";
const DESCRIBE_PATH: &str = "vision/v3.2/describe";

/// Azure Computer Vision client covering the Read (OCR) and Describe
/// (captioning) operations.
#[derive(Clone)]
pub struct AzureVisionProvider {
    client: Client,
    config: VisionConfig,
}

impl AzureVisionProvider {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, VisionError> {
        self.config
            .endpoint
            .join(path)
            .map_err(|e| VisionError::ServiceSubmission(format!("bad endpoint: {}", e)))
    }

    async fn submit_image(&self, url: Url, image_path: &Path) -> Result<Response, VisionError> {
        let image = tokio::fs::read(image_path)
            .await
            .map_err(|source| VisionError::ImageRead {
                path: image_path.to_path_buf(),
                source,
            })?;

        let response = self
            .client
            .post(url)
            .header(KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|e| VisionError::ServiceSubmission(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::ServiceSubmission(format!(
                "status {}: {}",
                status,
                body.trim()
            )));
        }

        Ok(response)
    }

    async fn read_status(&self, operation_url: &str) -> Result<PollState<String>, VisionError> {
        let response = self
            .client
            .get(operation_url)
            .header(KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VisionError::InvalidResponse(format!(
                "read status request returned {}",
                response.status()
            )));
        }

        let result: ReadOperationResult = response.json().await?;
        poll_state(result, operation_url)
    }
}

fn poll_state(
    result: ReadOperationResult,
    operation_url: &str,
) -> Result<PollState<String>, VisionError> {
    match result.status {
        OperationStatus::NotStarted | OperationStatus::Running => Ok(PollState::Pending),
        OperationStatus::Succeeded => Ok(PollState::Done(
            result.analyze_result.unwrap_or_default().text(),
        )),
        OperationStatus::Failed => Err(VisionError::RecognitionFailed(format!(
            "operation {} reported status 'failed'",
            operation_url
        ))),
    }
}

fn operation_location(headers: &HeaderMap) -> Result<String, VisionError> {
    headers
        .get(OPERATION_LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| {
            VisionError::ServiceSubmission("response has no Operation-Location header".to_string())
        })
}

/// Highest-confidence caption; the earliest one wins a tie.
pub fn top_caption(description: ImageDescription) -> Option<String> {
    let mut best: Option<(f64, String)> = None;
    for caption in description.captions {
        match &best {
            Some((confidence, _)) if caption.confidence <= *confidence => {}
            _ => best = Some((caption.confidence, caption.text)),
        }
    }
    best.map(|(_, text)| text)
}

#[async_trait]
impl TextRecognizer for AzureVisionProvider {
    async fn recognize_text(&self, image_path: &Path) -> Result<String, VisionError> {
        let url = self.endpoint(READ_PATH)?;
        let response = self.submit_image(url, image_path).await?;
        let operation_url = operation_location(response.headers())?;
        log::debug!("Read operation submitted: {}", operation_url);

        let text = poll_until_done(
            self.config.poll_interval,
            self.config.max_poll_attempts,
            |_| self.read_status(&operation_url),
        )
        .await?;

        log::info!("Recognized {} lines of text", text.lines().count());
        Ok(text)
    }
}

#[async_trait]
impl ImageDescriber for AzureVisionProvider {
    async fn describe_image(&self, image_path: &Path) -> Result<String, VisionError> {
        let mut url = self.endpoint(DESCRIBE_PATH)?;
        url.query_pairs_mut()
            .append_pair("maxCandidates", "1")
            .append_pair("language", "en");

        let response = self.submit_image(url, image_path).await?;
        let result: DescribeResult = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

        let caption = top_caption(result.description).ok_or(VisionError::DescriptionEmpty)?;
        log::info!("Image described as: {}", caption);
        Ok(caption)
    }
}
