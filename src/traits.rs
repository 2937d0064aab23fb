//! Seams for the two recognition collaborators.
//!
//! The app shell talks to the digit-recognition service and to the
//! on-device sign model only through these traits, so either side can be
//! substituted (mock servers, fixed-output models) without touching the
//! flows that consume them.

use async_trait::async_trait;
use image::{DynamicImage, RgbImage};

use crate::Result;
use crate::classify::ScanOptions;
use crate::types::{ConfidenceVector, DigitSequence};

/// Remote digit recognition for price-tag photos.
#[async_trait]
pub trait DigitRecognizer: Send + Sync {
    /// Recognizer name for logging/debugging.
    fn name(&self) -> &str;

    /// Recognize the digits shown in `image`, in reading order.
    async fn recognize(&self, image: &DynamicImage) -> Result<DigitSequence>;
}

/// On-device road-sign model, treated as a black box.
///
/// Inference is synchronous from the caller's point of view.
pub trait SignModel: Send + Sync {
    /// Model name for logging/debugging.
    fn name(&self) -> &str;

    /// Run inference on an input already resized to
    /// [`MODEL_INPUT_SIZE`](crate::classify::MODEL_INPUT_SIZE) square.
    fn predict(&self, input: &RgbImage, options: &ScanOptions) -> Result<ConfidenceVector>;
}
