//! Public types for the Roadsign API.

mod category;
mod detection;
mod digits;
mod payload;

pub use category::{CATEGORY_COUNT, CATEGORY_LABELS, SignCategory};
pub use detection::{ConfidenceVector, Detection, UNRECOGNIZED_LABEL};
pub use digits::DigitSequence;
pub use payload::{ImagePayload, JPEG_CONTENT_TYPE, JPEG_QUALITY};
