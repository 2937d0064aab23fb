//! App - session gate plus the two recognition flows

use std::sync::Arc;

use image::DynamicImage;
use tokio::sync::{Mutex, RwLock};
use tokio::task::spawn_blocking;
use tracing::{info, instrument};

use crate::classify::SignScanner;
use crate::session::{Credentials, Registration, Session};
use crate::traits::DigitRecognizer;
use crate::types::{Detection, DigitSequence};
use crate::{Result, RoadsignError};

/// Display state of the digit-recognition screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigitScreen {
    /// An upload is in flight.
    pub processing: bool,
    /// Digits from the last successful upload.
    pub digits: DigitSequence,
    /// Price rendered from `digits`, empty until the first success.
    pub price: String,
    /// Message for the last failed upload, cleared when a new one starts.
    pub error: Option<String>,
}

/// Display state of the road-sign screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanScreen {
    pub detection: Option<Detection>,
}

/// Application shell.
///
/// Owns the session and the display state of both screens. Actions may run
/// concurrently; they are not coordinated, so whichever finishes last
/// determines what a screen shows.
pub struct App {
    recognizer: Arc<dyn DigitRecognizer>,
    scanner: Option<SignScanner>,
    session: RwLock<Session>,
    digit_screen: Mutex<DigitScreen>,
    scan_screen: Mutex<ScanScreen>,
}

impl App {
    pub(crate) fn new(
        recognizer: Arc<dyn DigitRecognizer>,
        scanner: Option<SignScanner>,
        session: Session,
    ) -> Self {
        Self {
            recognizer,
            scanner,
            session: RwLock::new(session),
            digit_screen: Mutex::new(DigitScreen::default()),
            scan_screen: Mutex::new(ScanScreen::default()),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.session.write().await.login(credentials)?;
        info!("logged in");
        Ok(())
    }

    /// Validate a registration form. The session is not changed.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        registration.validate()?;
        info!("registration accepted");
        Ok(())
    }

    pub async fn logout(&self) {
        self.session.write().await.logout();
        info!("logged out");
    }

    /// Whether a sign model was configured.
    pub fn can_scan(&self) -> bool {
        self.scanner.is_some()
    }

    /// Upload a price-tag photo and return the recognized price.
    ///
    /// The digit screen shows `processing` while the upload runs and then
    /// either the new digits and price, or the error message.
    #[instrument(skip_all, fields(recognizer = self.recognizer.name()))]
    pub async fn recognize_price(&self, image: &DynamicImage) -> Result<String> {
        self.session.read().await.require_authenticated()?;

        {
            let mut screen = self.digit_screen.lock().await;
            screen.processing = true;
            screen.error = None;
        }

        let result = self.recognizer.recognize(image).await;

        let mut screen = self.digit_screen.lock().await;
        screen.processing = false;
        match result {
            Ok(digits) => {
                let price = digits.to_currency();
                info!(%price, "price recognized");
                screen.price = price.clone();
                screen.digits = digits;
                Ok(price)
            }
            Err(e) => {
                screen.error = Some(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// Classify a road-sign photo with the configured model.
    ///
    /// Resizing and inference run on the blocking pool, so any runtime
    /// flavor works. On failure the scan screen keeps its previous detection.
    pub async fn scan_sign(&self, image: &DynamicImage) -> Result<Detection> {
        self.session.read().await.require_authenticated()?;
        let scanner = self.scanner.clone().ok_or(RoadsignError::NoModel)?;

        let image = image.clone();
        let detection = spawn_blocking(move || scanner.scan(&image))
            .await
            .map_err(|e| RoadsignError::Classifier(format!("scan task failed: {e}")))??;
        info!(sign = detection.label(), "sign scanned");

        self.scan_screen.lock().await.detection = Some(detection);
        Ok(detection)
    }

    pub async fn digit_screen(&self) -> DigitScreen {
        self.digit_screen.lock().await.clone()
    }

    pub async fn scan_screen(&self) -> ScanScreen {
        self.scan_screen.lock().await.clone()
    }
}
