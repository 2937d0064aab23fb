//! Roadsign - road-sign classification and price-tag digit recognition
//!
//! This crate provides the recognition core of a scanning app: an upload
//! client for a remote digit-recognition service, the rendering of its
//! digits as a price, and the selection of a road-sign category from an
//! on-device model's confidence vector. An [`App`] shell ties both flows
//! to a login session.
//!
//! # Price Example
//!
//! ```rust,no_run
//! use roadsign::{Credentials, Roadsign};
//!
//! #[tokio::main]
//! async fn main() -> roadsign::Result<()> {
//!     let app = Roadsign::builder()
//!         .endpoint("http://192.168.100.10:5001/recognize_digits")
//!         .build()?;
//!
//!     app.login(&Credentials::new("me@example.com", "secret")).await?;
//!
//!     let image = image::open("price_tag.jpg")?;
//!     let price = app.recognize_price(&image).await?;
//!     println!("Detected Price: {price}");
//!     Ok(())
//! }
//! ```
//!
//! # Selection Example
//!
//! ```rust
//! use roadsign::{ConfidenceVector, SignCategory, select};
//!
//! let detection = select(&ConfidenceVector::new([0.1, 0.7, 0.1, 0.1]));
//! assert_eq!(detection.category(), Some(SignCategory::SpeedLimit));
//! assert_eq!(detection.confidence_percent().as_deref(), Some("70.0%"));
//! ```

pub mod app;
pub mod classify;
#[cfg(feature = "cli")]
pub mod config;
pub mod currency;
pub mod error;
pub mod providers;
pub mod session;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use app::{App, DigitScreen, Roadsign, RoadsignBuilder, ScanScreen};
pub use classify::{MODEL_INPUT_SIZE, ScanOptions, SignScanner, select};
pub use currency::format_currency;
pub use error::{Result, RoadsignError};
pub use providers::{MultipartBody, UploadClient};
pub use session::{Credentials, Registration, Session};
pub use traits::{DigitRecognizer, SignModel};

// Re-export all types
pub use types::{
    CATEGORY_LABELS, ConfidenceVector, Detection, DigitSequence, ImagePayload, SignCategory,
    UNRECOGNIZED_LABEL,
};
