use serde::{Deserialize, Serialize};

/// Coarse classification of a free-text incident category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Water,
    Power,
    Gas,
    Other,
}

const WATER_KEYWORDS: &[&str] = &["agua", "tubería", "tuberia"];
const POWER_KEYWORDS: &[&str] = &["luz", "alumbrado", "electricidad"];
const GAS_KEYWORDS: &[&str] = &["gas"];

impl CategoryGroup {
    /// Classify a category by case-insensitive keyword containment
    ///
    /// Groups are tested in order water, power, gas; the first hit wins.
    pub fn classify(category: &str) -> Self {
        let lowered = category.to_lowercase();
        let hit = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if hit(WATER_KEYWORDS) {
            Self::Water
        } else if hit(POWER_KEYWORDS) {
            Self::Power
        } else if hit(GAS_KEYWORDS) {
            Self::Gas
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Power => "power",
            Self::Gas => "gas",
            Self::Other => "other",
        }
    }
}
