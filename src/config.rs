//! Gesture recognizer configuration
//!
//! Thresholds are fixed for the lifetime of a recognizer. They can be loaded
//! from a TOML file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for gesture recognition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Longest touch (seconds) still considered a swipe. Reserved, not used for gating.
    pub max_swipe_time: f64,

    /// Minimum swipe length as a fraction of the screen width
    pub min_swipe_distance: f64,

    /// Window (seconds) in which a second touch-down counts as a double tap
    pub max_double_tap_time: f64,

    /// Honour debug key presses (arrow keys, E, Space)
    pub debug_keys: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_swipe_time: 0.5,
            min_swipe_distance: 0.02,
            max_double_tap_time: 0.1,
            debug_keys: true,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GestureConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded gesture config from {:?}", path);
        Ok(config)
    }

    /// Reject thresholds that would make classification meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.min_swipe_distance.is_finite() || self.min_swipe_distance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_swipe_distance must be positive, got {}",
                self.min_swipe_distance
            )));
        }
        if !self.max_double_tap_time.is_finite() || self.max_double_tap_time < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_double_tap_time must be non-negative, got {}",
                self.max_double_tap_time
            )));
        }
        if !self.max_swipe_time.is_finite() || self.max_swipe_time < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_swipe_time must be non-negative, got {}",
                self.max_swipe_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let config = GestureConfig::default();
        assert!((config.max_swipe_time - 0.5).abs() < f64::EPSILON);
        assert!((config.min_swipe_distance - 0.02).abs() < f64::EPSILON);
        assert!((config.max_double_tap_time - 0.1).abs() < f64::EPSILON);
        assert!(config.debug_keys);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GestureConfig::from_toml_str("min_swipe_distance = 0.05\ndebug_keys = false\n")
            .unwrap();
        assert!((config.min_swipe_distance - 0.05).abs() < f64::EPSILON);
        assert!(!config.debug_keys);
        assert!((config.max_double_tap_time - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GestureConfig::from_toml_str("").unwrap();
        assert_eq!(config, GestureConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_swipe_distance() {
        let err = GestureConfig::from_toml_str("min_swipe_distance = 0.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_double_tap_window() {
        let err = GestureConfig::from_toml_str("max_double_tap_time = -1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = GestureConfig::from_toml_str("min_swipe_distance = \"far\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
