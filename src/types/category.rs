//! Road-sign categories recognised by the deployed sign model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of categories, and therefore the length of every confidence vector.
pub const CATEGORY_COUNT: usize = 4;

/// Display labels, indexed like the model's output vector.
pub const CATEGORY_LABELS: [&str; CATEGORY_COUNT] =
    ["Crosswalk", "Speed limit", "Stop sign", "Traffic light"];

/// One of the fixed road-sign categories.
///
/// Declaration order matches the model's output indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignCategory {
    Crosswalk,
    SpeedLimit,
    StopSign,
    TrafficLight,
}

impl SignCategory {
    /// All categories in model index order.
    pub const ALL: [SignCategory; CATEGORY_COUNT] = [
        SignCategory::Crosswalk,
        SignCategory::SpeedLimit,
        SignCategory::StopSign,
        SignCategory::TrafficLight,
    ];

    /// Position of this category in the confidence vector.
    pub fn index(self) -> usize {
        match self {
            SignCategory::Crosswalk => 0,
            SignCategory::SpeedLimit => 1,
            SignCategory::StopSign => 2,
            SignCategory::TrafficLight => 3,
        }
    }

    /// Category at a confidence-vector index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        CATEGORY_LABELS[self.index()]
    }
}

impl fmt::Display for SignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
