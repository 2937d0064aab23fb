//! HTTP client for the digit-recognition service.
//!
//! One call is one `POST` of a multipart-encoded JPEG; the service answers
//! with a JSON array of digits. There is no retry and no timeout beyond the
//! transport's defaults.

use std::time::Instant;

use async_trait::async_trait;
use image::DynamicImage;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument, warn};

use super::multipart::MultipartBody;
use crate::telemetry;
use crate::traits::DigitRecognizer;
use crate::types::{DigitSequence, ImagePayload};
use crate::{Result, RoadsignError};

/// Endpoint of the deployed recognition service.
pub const DEFAULT_ENDPOINT: &str = "http://192.168.100.10:5001/recognize_digits";

/// Client for the digit-recognition service.
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// instance can serve concurrent uploads.
#[derive(Clone, Debug)]
pub struct UploadClient {
    http: Client,
    endpoint: String,
}

impl UploadClient {
    /// Create a client for [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client with a custom endpoint (for testing with wiremock).
    ///
    /// The endpoint is only parsed when a request is made.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_http(Client::new(), endpoint)
    }

    /// Create a client that reuses an existing HTTP transport.
    pub fn with_http(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Encode `image` as JPEG and upload it for recognition.
    ///
    /// Encoding happens before anything touches the network: an image that
    /// cannot be encoded fails with `InvalidData` and sends no request.
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn upload_image(&self, image: &DynamicImage) -> Result<DigitSequence> {
        let payload = ImagePayload::encode_jpeg(image)?;
        self.upload_payload(&payload).await
    }

    /// Upload an already-encoded payload for recognition.
    ///
    /// # Errors
    /// * `InvalidUrl` - the endpoint does not parse
    /// * `Http` - the transport failed
    /// * `ServerError` - non-2xx status with a UTF-8 body
    /// * `InvalidResponse` - non-2xx status with a non-UTF-8 body, or a body
    ///   that could not be read after the status arrived
    /// * `Json` - 2xx body is not a JSON integer array
    pub async fn upload_payload(&self, payload: &ImagePayload) -> Result<DigitSequence> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| RoadsignError::InvalidUrl(format!("{}: {e}", self.endpoint)))?;

        let body = MultipartBody::new(payload);
        debug!(
            boundary = body.boundary(),
            bytes = body.as_bytes().len(),
            "uploading image"
        );

        let started = Instant::now();
        let result = self.send(url, body).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::UPLOADS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::UPLOAD_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        match &result {
            Ok(digits) => debug!(count = digits.len(), "digits recognized"),
            Err(e) => warn!(error = %e, "upload failed"),
        }
        result
    }

    async fn send(&self, url: Url, body: MultipartBody) -> Result<DigitSequence> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, body.content_type())
            .body(body.into_bytes())
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            debug!(%status, error = %e, "response body unreadable");
            RoadsignError::InvalidResponse
        })?;

        interpret_response(status, &bytes)
    }
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DigitRecognizer for UploadClient {
    fn name(&self) -> &str {
        "upload"
    }

    async fn recognize(&self, image: &DynamicImage) -> Result<DigitSequence> {
        self.upload_image(image).await
    }
}

/// Map a status and body to the recognized digits or a typed error.
fn interpret_response(status: StatusCode, body: &[u8]) -> Result<DigitSequence> {
    if !status.is_success() {
        return match std::str::from_utf8(body) {
            Ok(text) => Err(RoadsignError::ServerError(text.to_string())),
            Err(_) => Err(RoadsignError::InvalidResponse),
        };
    }

    Ok(serde_json::from_slice(body)?)
}
