//! Road-sign scanning: input preparation, model call, selection.

use std::sync::Arc;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use tracing::{debug, warn};

use super::selector::select;
use crate::telemetry;
use crate::traits::SignModel;
use crate::types::Detection;
use crate::{Result, RoadsignError};

/// Side length, in pixels, of the square input the sign model expects.
pub const MODEL_INPUT_SIZE: u32 = 416;

/// Thresholds forwarded to the sign model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    /// Overlap threshold for suppressing duplicate boxes. Default: 0.5.
    pub iou_threshold: f64,
    /// Minimum box confidence. Default: 0.5.
    pub confidence_threshold: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            iou_threshold: 0.5,
            confidence_threshold: 0.5,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iou_threshold(mut self, value: f64) -> Self {
        self.iou_threshold = value;
        self
    }

    pub fn confidence_threshold(mut self, value: f64) -> Self {
        self.confidence_threshold = value;
        self
    }

    /// Check both thresholds lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("iou_threshold", self.iou_threshold),
            ("confidence_threshold", self.confidence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RoadsignError::Configuration(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Resize an image to the model's square input.
///
/// Zero-size images cannot be resized and fail with `InvalidData`.
pub fn prepare_input(image: &DynamicImage) -> Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RoadsignError::InvalidData(format!(
            "cannot resize a {}x{} image",
            image.width(),
            image.height()
        )));
    }

    Ok(image
        .resize_exact(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, FilterType::Triangle)
        .to_rgb8())
}

/// Runs a [`SignModel`] over images and selects the detected sign.
#[derive(Clone)]
pub struct SignScanner {
    model: Arc<dyn SignModel>,
    options: ScanOptions,
}

impl SignScanner {
    pub fn new(model: Arc<dyn SignModel>) -> Self {
        Self::with_options(model, ScanOptions::default())
    }

    pub fn with_options(model: Arc<dyn SignModel>, options: ScanOptions) -> Self {
        Self { model, options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Classify one image.
    pub fn scan(&self, image: &DynamicImage) -> Result<Detection> {
        let result = self.run(image);

        let outcome = match &result {
            Ok(detection) if detection.is_recognized() => "recognized",
            Ok(_) => "unrecognized",
            Err(_) => "error",
        };
        metrics::counter!(telemetry::SCANS_TOTAL, "outcome" => outcome).increment(1);

        if let Err(e) = &result {
            warn!(model = self.model.name(), error = %e, "sign scan failed");
        }
        result
    }

    fn run(&self, image: &DynamicImage) -> Result<Detection> {
        let input = prepare_input(image)?;
        let vector = self.model.predict(&input, &self.options)?;
        debug!(model = self.model.name(), confidences = ?vector.values(), "sign model output");
        Ok(select(&vector))
    }
}
