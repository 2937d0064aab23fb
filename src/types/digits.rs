//! Digit sequences returned by the recognition service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;

/// Ordered digits exactly as decoded from the server's JSON array.
///
/// No range or length constraint is applied; order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSequence(Vec<i64>);

impl DigitSequence {
    pub fn new(digits: Vec<i64>) -> Self {
        Self(digits)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a price string, see [`format_currency`].
    pub fn to_currency(&self) -> String {
        format_currency(&self.0)
    }
}

impl From<Vec<i64>> for DigitSequence {
    fn from(digits: Vec<i64>) -> Self {
        Self(digits)
    }
}

/// Comma-separated digits, e.g. `"3, 4, 5"`.
impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
