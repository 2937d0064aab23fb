//! Builder for configuring app instances

use std::sync::Arc;

use super::App;
use crate::classify::{ScanOptions, SignScanner};
use crate::providers::UploadClient;
use crate::session::Session;
use crate::traits::{DigitRecognizer, SignModel};
use crate::{Result, RoadsignError};

/// Main entry point for creating app instances.
pub struct Roadsign;

impl Roadsign {
    /// Create a new builder for configuring the app.
    pub fn builder() -> RoadsignBuilder {
        RoadsignBuilder::new()
    }
}

/// Builder for configuring app instances.
#[derive(Default)]
pub struct RoadsignBuilder {
    endpoint: Option<String>,
    http: Option<reqwest::Client>,
    recognizer: Option<Arc<dyn DigitRecognizer>>,
    sign_model: Option<Arc<dyn SignModel>>,
    scan_options: ScanOptions,
    session: Session,
}

impl RoadsignBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the recognition service endpoint.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Share an existing HTTP client with the upload client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Use a custom digit recognizer instead of the HTTP upload client.
    ///
    /// Cannot be combined with [`endpoint`](Self::endpoint) or
    /// [`http_client`](Self::http_client); [`build`](Self::build) rejects
    /// that with `Configuration`.
    pub fn recognizer(mut self, recognizer: Arc<dyn DigitRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Enable sign scanning with the given model.
    pub fn sign_model(mut self, model: Arc<dyn SignModel>) -> Self {
        self.sign_model = Some(model);
        self
    }

    /// Set the thresholds passed to the sign model.
    pub fn scan_options(mut self, options: ScanOptions) -> Self {
        self.scan_options = options;
        self
    }

    /// Initial session, e.g. one restored as logged in.
    pub fn session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Build the app.
    ///
    /// Fails with `Configuration` when a scan threshold is outside `[0, 1]`,
    /// or when a custom recognizer is combined with transport settings.
    pub fn build(self) -> Result<App> {
        self.scan_options.validate()?;

        let recognizer: Arc<dyn DigitRecognizer> = match self.recognizer {
            Some(recognizer) => {
                if self.endpoint.is_some() || self.http.is_some() {
                    return Err(RoadsignError::Configuration(
                        "endpoint and http_client do not apply to a custom recognizer".to_string(),
                    ));
                }
                recognizer
            }
            None => {
                let endpoint = self
                    .endpoint
                    .unwrap_or_else(|| crate::providers::DEFAULT_ENDPOINT.to_string());
                let client = match self.http {
                    Some(http) => UploadClient::with_http(http, endpoint),
                    None => UploadClient::with_endpoint(endpoint),
                };
                Arc::new(client)
            }
        };

        let scanner = self
            .sign_model
            .map(|model| SignScanner::with_options(model, self.scan_options));

        Ok(App::new(recognizer, scanner, self.session))
    }
}
