use serde::{Deserialize, Serialize};

/// Tuning constants for hash-based placement
///
/// A hashed id lands at `top_min + (h * top_multiplier) % top_span` and
/// `left_min + (h * left_multiplier) % left_span`, all in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub top_min: f64,
    pub top_span: f64,
    pub top_multiplier: f64,
    pub left_min: f64,
    pub left_span: f64,
    pub left_multiplier: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_min: 20.0,
            top_span: 60.0,
            top_multiplier: 13.0,
            left_min: 15.0,
            left_span: 70.0,
            left_multiplier: 17.0,
        }
    }
}

impl Layout {
    pub fn top_range(&self) -> (f64, f64) {
        (self.top_min, self.top_min + self.top_span)
    }

    pub fn left_range(&self) -> (f64, f64) {
        (self.left_min, self.left_min + self.left_span)
    }
}
