//! Tests for the [`App`] shell: session gating, screen state, and the
//! recognizer / sign-model seams.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::thread::{self, ThreadId};

use async_trait::async_trait;
use image::{DynamicImage, RgbImage};
use tokio::sync::{Mutex, oneshot};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roadsign::{
    App, ConfidenceVector, Credentials, Detection, DigitRecognizer, DigitSequence, MODEL_INPUT_SIZE,
    Registration, Result, Roadsign, RoadsignError, ScanOptions, Session, SignCategory, SignModel,
};

// ============================================================================
// Mock collaborators
// ============================================================================

struct StaticRecognizer {
    digits: Vec<i64>,
}

#[async_trait]
impl DigitRecognizer for StaticRecognizer {
    fn name(&self) -> &str {
        "static"
    }

    async fn recognize(&self, _image: &DynamicImage) -> Result<DigitSequence> {
        Ok(DigitSequence::new(self.digits.clone()))
    }
}

struct FailingRecognizer;

#[async_trait]
impl DigitRecognizer for FailingRecognizer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn recognize(&self, _image: &DynamicImage) -> Result<DigitSequence> {
        Err(RoadsignError::ServerError("no digits found".to_string()))
    }
}

/// Holds each call until its gate (keyed by image width) is released.
struct GatedRecognizer {
    gates: Mutex<HashMap<u32, oneshot::Receiver<Vec<i64>>>>,
}

#[async_trait]
impl DigitRecognizer for GatedRecognizer {
    fn name(&self) -> &str {
        "gated"
    }

    async fn recognize(&self, image: &DynamicImage) -> Result<DigitSequence> {
        let gate = self
            .gates
            .lock()
            .await
            .remove(&image.width())
            .expect("gate for image width");
        Ok(DigitSequence::new(gate.await.expect("gate released")))
    }
}

struct FixedModel {
    output: [f64; 4],
    seen: StdMutex<Option<(u32, u32, ScanOptions)>>,
    thread: StdMutex<Option<ThreadId>>,
}

impl FixedModel {
    fn new(output: [f64; 4]) -> Self {
        Self {
            output,
            seen: StdMutex::new(None),
            thread: StdMutex::new(None),
        }
    }
}

impl SignModel for FixedModel {
    fn name(&self) -> &str {
        "fixed"
    }

    fn predict(&self, input: &RgbImage, options: &ScanOptions) -> Result<ConfidenceVector> {
        *self.seen.lock().unwrap() = Some((input.width(), input.height(), *options));
        *self.thread.lock().unwrap() = Some(thread::current().id());
        Ok(ConfidenceVector::new(self.output))
    }
}

struct BrokenModel;

impl SignModel for BrokenModel {
    fn name(&self) -> &str {
        "broken"
    }

    fn predict(&self, _input: &RgbImage, _options: &ScanOptions) -> Result<ConfidenceVector> {
        Err(RoadsignError::Classifier("model failed to load".to_string()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn photo(width: u32) -> DynamicImage {
    DynamicImage::new_rgb8(width, 10)
}

fn logged_in_app(recognizer: Arc<dyn DigitRecognizer>) -> App {
    Roadsign::builder()
        .recognizer(recognizer)
        .session(Session::authenticated())
        .build()
        .unwrap()
}

// ============================================================================
// Session gating
// ============================================================================

#[tokio::test]
async fn actions_require_login() {
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![1] }))
        .sign_model(Arc::new(FixedModel::new([0.9, 0.0, 0.0, 0.0])))
        .build()
        .unwrap();

    assert!(!app.is_authenticated().await);
    assert!(matches!(
        app.recognize_price(&photo(4)).await,
        Err(RoadsignError::NotAuthenticated)
    ));
    assert!(matches!(
        app.scan_sign(&photo(4)).await,
        Err(RoadsignError::NotAuthenticated)
    ));
    assert!(!app.digit_screen().await.processing);
}

#[tokio::test]
async fn login_and_logout_toggle_access() {
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![2, 5] }))
        .build()
        .unwrap();

    let err = app.login(&Credentials::new("", "pw")).await.unwrap_err();
    assert!(matches!(err, RoadsignError::MissingFields));
    assert!(!app.is_authenticated().await);

    app.login(&Credentials::new("driver@example.com", "pw"))
        .await
        .unwrap();
    assert_eq!(app.recognize_price(&photo(4)).await.unwrap(), "$0.25");

    app.logout().await;
    assert!(matches!(
        app.recognize_price(&photo(4)).await,
        Err(RoadsignError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn registration_does_not_log_in() {
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .build()
        .unwrap();

    let err = app
        .register(&Registration::new("a@b.c", "one", "two"))
        .await
        .unwrap_err();
    assert!(matches!(err, RoadsignError::PasswordMismatch));

    app.register(&Registration::new("a@b.c", "same", "same"))
        .await
        .unwrap();
    assert!(!app.is_authenticated().await);
}

// ============================================================================
// Digit screen
// ============================================================================

#[tokio::test]
async fn successful_recognition_updates_digit_screen() {
    let app = logged_in_app(Arc::new(StaticRecognizer {
        digits: vec![1, 2, 3],
    }));

    let price = app.recognize_price(&photo(4)).await.unwrap();
    assert_eq!(price, "$1.23");

    let screen = app.digit_screen().await;
    assert!(!screen.processing);
    assert_eq!(screen.price, "$1.23");
    assert_eq!(screen.digits.as_slice(), &[1, 2, 3]);
    assert_eq!(screen.error, None);
}

#[tokio::test]
async fn failed_recognition_sets_error_message() {
    let app = logged_in_app(Arc::new(FailingRecognizer));

    let err = app.recognize_price(&photo(4)).await.unwrap_err();
    assert!(matches!(err, RoadsignError::ServerError(_)));

    let screen = app.digit_screen().await;
    assert!(!screen.processing);
    assert_eq!(
        screen.error.as_deref(),
        Some("Error: server error: no digits found")
    );
    assert!(screen.price.is_empty());
}

#[tokio::test]
async fn screen_is_processing_while_upload_is_in_flight() {
    let (tx, rx) = oneshot::channel();
    let recognizer = GatedRecognizer {
        gates: Mutex::new(HashMap::from([(4, rx)])),
    };
    let app = Arc::new(logged_in_app(Arc::new(recognizer)));

    let task = tokio::spawn({
        let app = Arc::clone(&app);
        async move { app.recognize_price(&photo(4)).await }
    });

    while !app.digit_screen().await.processing {
        tokio::task::yield_now().await;
    }

    tx.send(vec![7]).unwrap();
    assert_eq!(task.await.unwrap().unwrap(), "$0.70");
    assert!(!app.digit_screen().await.processing);
}

#[tokio::test]
async fn last_finished_upload_wins() {
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let recognizer = GatedRecognizer {
        gates: Mutex::new(HashMap::from([(1, rx_first), (2, rx_second)])),
    };
    let app = Arc::new(logged_in_app(Arc::new(recognizer)));

    let first = tokio::spawn({
        let app = Arc::clone(&app);
        async move { app.recognize_price(&photo(1)).await }
    });
    let second = tokio::spawn({
        let app = Arc::clone(&app);
        async move { app.recognize_price(&photo(2)).await }
    });

    // The later upload finishes first, the earlier one last.
    tx_second.send(vec![2, 2, 2]).unwrap();
    assert_eq!(second.await.unwrap().unwrap(), "$2.22");
    tx_first.send(vec![1, 1, 1]).unwrap();
    assert_eq!(first.await.unwrap().unwrap(), "$1.11");

    assert_eq!(app.digit_screen().await.price, "$1.11");
}

#[tokio::test]
async fn default_recognizer_uploads_to_configured_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recognize_digits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![4, 5, 6, 7]))
        .expect(1)
        .mount(&server)
        .await;

    let app = Roadsign::builder()
        .endpoint(format!("{}/recognize_digits", server.uri()))
        .http_client(reqwest::Client::new())
        .session(Session::authenticated())
        .build()
        .unwrap();

    assert_eq!(app.recognize_price(&photo(8)).await.unwrap(), "$45.67");
}

// ============================================================================
// Scan screen
// ============================================================================

#[tokio::test]
async fn scan_resizes_input_and_forwards_thresholds() {
    let model = Arc::new(FixedModel::new([0.05, 0.05, 0.85, 0.05]));
    let options = ScanOptions::new().confidence_threshold(0.4);
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .sign_model(model.clone())
        .scan_options(options)
        .session(Session::authenticated())
        .build()
        .unwrap();

    let detection = app.scan_sign(&DynamicImage::new_rgb8(1024, 768)).await.unwrap();
    assert_eq!(detection.category(), Some(SignCategory::StopSign));
    assert_eq!(detection.confidence_percent().as_deref(), Some("85.0%"));

    let seen = *model.seen.lock().unwrap();
    let seen = seen.expect("model was called");
    assert_eq!(seen, (MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, options));

    assert_eq!(app.scan_screen().await.detection, Some(detection));
}

#[tokio::test]
async fn scan_runs_off_the_runtime_thread() {
    let model = Arc::new(FixedModel::new([0.9, 0.05, 0.03, 0.02]));
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .sign_model(model.clone())
        .session(Session::authenticated())
        .build()
        .unwrap();

    let detection = app.scan_sign(&photo(640)).await.unwrap();
    assert_eq!(detection.category(), Some(SignCategory::Crosswalk));

    let scanned_on = *model.thread.lock().unwrap();
    let scanned_on = scanned_on.expect("model was called");
    assert_ne!(scanned_on, thread::current().id());
}

#[tokio::test]
async fn tied_scan_reports_unrecognized_class() {
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .sign_model(Arc::new(FixedModel::new([0.5, 0.5, 0.1, 0.1])))
        .session(Session::authenticated())
        .build()
        .unwrap();

    let detection = app.scan_sign(&photo(20)).await.unwrap();
    assert_eq!(detection, Detection::Unrecognized);
    assert_eq!(detection.label(), "Unrecognized class");
}

#[tokio::test]
async fn failed_scan_keeps_previous_detection() {
    let app = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .sign_model(Arc::new(BrokenModel))
        .session(Session::authenticated())
        .build()
        .unwrap();

    let err = app.scan_sign(&photo(20)).await.unwrap_err();
    assert!(matches!(err, RoadsignError::Classifier(_)));
    assert_eq!(app.scan_screen().await.detection, None);

    let err = app.scan_sign(&DynamicImage::new_rgb8(0, 0)).await.unwrap_err();
    assert!(matches!(err, RoadsignError::InvalidData(_)));
}

#[tokio::test]
async fn scan_without_model_is_an_error() {
    let app = logged_in_app(Arc::new(StaticRecognizer { digits: vec![] }));
    assert!(!app.can_scan());
    assert!(matches!(
        app.scan_sign(&photo(20)).await,
        Err(RoadsignError::NoModel)
    ));
}

// ============================================================================
// Builder validation
// ============================================================================

#[test]
fn builder_rejects_out_of_range_thresholds() {
    let result = Roadsign::builder()
        .scan_options(ScanOptions::new().iou_threshold(-0.1))
        .build();
    assert!(matches!(result, Err(RoadsignError::Configuration(_))));
}

#[test]
fn builder_rejects_endpoint_with_custom_recognizer() {
    let result = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .endpoint("http://localhost:5001/recognize_digits")
        .build();
    assert!(matches!(result, Err(RoadsignError::Configuration(_))));
}

#[test]
fn builder_rejects_http_client_with_custom_recognizer() {
    let result = Roadsign::builder()
        .recognizer(Arc::new(StaticRecognizer { digits: vec![] }))
        .http_client(reqwest::Client::new())
        .build();
    assert!(matches!(result, Err(RoadsignError::Configuration(_))));
}
