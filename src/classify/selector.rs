//! Arg-max selection over the sign model's confidence vector.
//!
//! Values are compared by their six-decimal text rather than numerically, so
//! differences below one millionth collapse into a tie. A candidate must be
//! strictly greater than every other entry; ties yield
//! [`Detection::Unrecognized`].

use crate::types::{CATEGORY_COUNT, ConfidenceVector, Detection, SignCategory};

/// Select the dominating category, if any.
///
/// Indices are tried in category order and the first one whose formatted
/// value is greater than all three others wins. The returned confidence is
/// the raw model value, not the formatted one.
pub fn select(vector: &ConfidenceVector) -> Detection {
    let formatted: [String; CATEGORY_COUNT] = vector.0.map(format_fixed);

    for category in SignCategory::ALL {
        let i = category.index();
        let dominates = formatted
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .all(|(_, other)| formatted[i] > *other);

        if dominates {
            return Detection::Recognized {
                category,
                confidence: vector.values()[i],
            };
        }
    }

    Detection::Unrecognized
}

/// Fixed six-decimal text, matching C's `%.6f` for non-finite values too.
pub(crate) fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.6}")
    }
}
