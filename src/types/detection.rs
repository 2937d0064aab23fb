//! Sign-model output and the selected detection.

use serde::{Deserialize, Serialize};

use super::category::{CATEGORY_COUNT, SignCategory};

/// Label reported when no category strictly dominates the others.
pub const UNRECOGNIZED_LABEL: &str = "Unrecognized class";

/// Per-category confidences from the sign model, indexed like
/// [`SignCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceVector(pub [f64; CATEGORY_COUNT]);

impl ConfidenceVector {
    pub fn new(values: [f64; CATEGORY_COUNT]) -> Self {
        Self(values)
    }

    /// Raw confidence for a category.
    pub fn get(&self, category: SignCategory) -> f64 {
        self.0[category.index()]
    }

    pub fn values(&self) -> &[f64; CATEGORY_COUNT] {
        &self.0
    }
}

impl From<[f64; CATEGORY_COUNT]> for ConfidenceVector {
    fn from(values: [f64; CATEGORY_COUNT]) -> Self {
        Self(values)
    }
}

/// Result of selecting a category from a [`ConfidenceVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Detection {
    /// One category dominated; `confidence` is its unformatted model value.
    Recognized {
        category: SignCategory,
        confidence: f64,
    },
    /// No category strictly dominated the other three.
    Unrecognized,
}

impl Detection {
    /// Label shown as the sign type.
    pub fn label(&self) -> &'static str {
        match self {
            Detection::Recognized { category, .. } => category.label(),
            Detection::Unrecognized => UNRECOGNIZED_LABEL,
        }
    }

    pub fn category(&self) -> Option<SignCategory> {
        match self {
            Detection::Recognized { category, .. } => Some(*category),
            Detection::Unrecognized => None,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            Detection::Recognized { confidence, .. } => Some(*confidence),
            Detection::Unrecognized => None,
        }
    }

    /// Confidence as a one-decimal percentage, e.g. `"87.5%"`.
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence().map(|c| format!("{:.1}%", c * 100.0))
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Detection::Recognized { .. })
    }
}
