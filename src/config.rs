use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::clusterer::DEFAULT_THRESHOLD;
use crate::position::Layout;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Cluster threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Tuning for the incident map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Merge distance, in the same percent units as positions
    pub threshold: f64,
    pub layout: Layout,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            layout: Layout::default(),
        }
    }
}

impl fmt::Display for MapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (top_lo, top_hi) = self.layout.top_range();
        let (left_lo, left_hi) = self.layout.left_range();
        writeln!(f, "Map configuration:")?;
        writeln!(f, "  Threshold: {}", self.threshold)?;
        writeln!(
            f,
            "  Top:  [{}, {}) x{}",
            top_lo, top_hi, self.layout.top_multiplier
        )?;
        write!(
            f,
            "  Left: [{}, {}) x{}",
            left_lo, left_hi, self.layout.left_multiplier
        )
    }
}

impl MapConfig {
    /// Read a JSON config file; missing fields fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: MapConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }

        let l = &self.layout;
        let axes = [
            ("top", l.top_min, l.top_span, l.top_multiplier),
            ("left", l.left_min, l.left_span, l.left_multiplier),
        ];

        for (axis, min, span, multiplier) in axes {
            if ![min, span, multiplier].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::InvalidLayout(format!(
                    "{} values must be finite",
                    axis
                )));
            }
            if span <= 0.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "{}_span must be greater than 0",
                    axis
                )));
            }
            if multiplier <= 0.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "{}_multiplier must be greater than 0",
                    axis
                )));
            }
            if min < 0.0 || min + span > 100.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "{} range [{}, {}) leaves the 0-100 surface",
                    axis,
                    min,
                    min + span
                )));
            }
        }

        Ok(())
    }
}
