//! Encoded image payloads.

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

use crate::{Result, RoadsignError};

/// MIME type of every uploaded payload.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// JPEG compression quality, in `0.0..=1.0`.
pub const JPEG_QUALITY: f32 = 0.8;

/// JPEG-encoded image bytes ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    /// Encode an image as JPEG at [`JPEG_QUALITY`].
    ///
    /// Images with a zero dimension cannot be encoded and fail with
    /// `InvalidData`.
    pub fn encode_jpeg(image: &DynamicImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(RoadsignError::InvalidData(format!(
                "cannot encode a {}x{} image",
                image.width(),
                image.height()
            )));
        }

        let rgb = image.to_rgb8();
        let mut bytes = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality());
            encoder.encode_image(&rgb)?;
        }

        Ok(Self { bytes })
    }

    /// Wrap bytes that are already JPEG-encoded.
    pub fn from_jpeg_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &'static str {
        JPEG_CONTENT_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// [`JPEG_QUALITY`] on the encoder's 1-100 scale.
fn jpeg_quality() -> u8 {
    (JPEG_QUALITY * 100.0).round() as u8
}
