use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid strategy label chosen on the form. Carried through untouched; the
/// numeric checks do not depend on it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GridStrategy {
    #[serde(rename = "ISIB")]
    Isib,
    #[serde(rename = "SR")]
    Sr,
    #[serde(rename = "straight")]
    Straight,
}

impl GridStrategy {
    pub const ALL: [GridStrategy; 3] = [GridStrategy::Isib, GridStrategy::Sr, GridStrategy::Straight];

    pub fn as_str(&self) -> &'static str {
        match self {
            GridStrategy::Isib => "ISIB",
            GridStrategy::Sr => "SR",
            GridStrategy::Straight => "straight",
        }
    }
}

impl fmt::Display for GridStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage step between consecutive ladder levels.
///
/// 0.5 means 0.5%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepPercent {
    pub value: f64,
}

impl StepPercent {
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns `price + price * (step / 100)`.
    ///
    /// Kept in this additive form so repeated application matches the form
    /// calculation bit for bit.
    pub fn advance(&self, price: f64) -> f64 {
        price + price * (self.value / 100.0)
    }

    /// Growth factor per level, `1 + step / 100`.
    pub fn ratio(&self) -> f64 {
        1.0 + self.value / 100.0
    }
}
