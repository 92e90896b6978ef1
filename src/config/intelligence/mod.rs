// ABOUTME: Body metrics engine configuration for identity matching and smoothing
// ABOUTME: Loads defaults, applies environment overrides, and validates tuning values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics Configuration Module
//!
//! # Module Structure
//!
//! - `matching` - Tolerance windows, score split and confidence cut-off
//! - `smoothing` - EMA smoothing factors
//! - `error` - Validation and parse errors
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `BODY_METRICS_WEIGHT_TOLERANCE_KG` | `matching.weight_tolerance_kg` |
//! | `BODY_METRICS_IMPEDANCE_TOLERANCE_OHM` | `matching.impedance_tolerance_ohm` |
//! | `BODY_METRICS_WEIGHT_SHARE` | `matching.weight_share` |
//! | `BODY_METRICS_MIN_CONFIDENCE` | `matching.min_confidence` |
//! | `BODY_METRICS_WEIGHT_ALPHA` | `smoothing.weight_alpha` |
//! | `BODY_METRICS_IMPEDANCE_ALPHA` | `smoothing.impedance_alpha` |

pub mod error;
pub mod matching;
pub mod smoothing;

pub use error::ConfigError;
pub use matching::MatchingConfig;
pub use smoothing::SmoothingConfig;

use body_metrics_core::constants::matching::MAX_CONFIDENCE;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main configuration container for the reading pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMetricsConfig {
    /// Identity matcher tuning
    pub matching: MatchingConfig,
    /// EMA smoothing factors
    pub smoothing: SmoothingConfig,
}

impl BodyMetricsConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            matching.weight_tolerance_kg = config.matching.weight_tolerance_kg,
            matching.impedance_tolerance_ohm = config.matching.impedance_tolerance_ohm,
            matching.weight_share = config.matching.weight_share,
            matching.min_confidence = config.matching.min_confidence,
            smoothing.weight_alpha = config.smoothing.weight_alpha,
            smoothing.impedance_alpha = config.smoothing.impedance_alpha,
            "Body metrics configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let matching = &self.matching;
        if !(matching.weight_tolerance_kg.is_finite() && matching.weight_tolerance_kg > 0.0) {
            return Err(ConfigError::InvalidRange(
                "weight_tolerance_kg must be > 0",
            ));
        }
        if !(matching.impedance_tolerance_ohm.is_finite() && matching.impedance_tolerance_ohm > 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "impedance_tolerance_ohm must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&matching.weight_share) {
            return Err(ConfigError::InvalidWeights(
                "weight_share must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..MAX_CONFIDENCE).contains(&matching.min_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "min_confidence must be in [0, 100)",
            ));
        }

        for alpha in [self.smoothing.weight_alpha, self.smoothing.impedance_alpha] {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "smoothing alpha must be in (0, 1]",
                ));
            }
        }

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "BODY_METRICS_WEIGHT_TOLERANCE_KG",
            &mut self.matching.weight_tolerance_kg,
        )?;
        Self::apply_env_var(
            "BODY_METRICS_IMPEDANCE_TOLERANCE_OHM",
            &mut self.matching.impedance_tolerance_ohm,
        )?;
        Self::apply_env_var(
            "BODY_METRICS_WEIGHT_SHARE",
            &mut self.matching.weight_share,
        )?;
        Self::apply_env_var(
            "BODY_METRICS_MIN_CONFIDENCE",
            &mut self.matching.min_confidence,
        )?;
        Self::apply_env_var(
            "BODY_METRICS_WEIGHT_ALPHA",
            &mut self.smoothing.weight_alpha,
        )?;
        Self::apply_env_var(
            "BODY_METRICS_IMPEDANCE_ALPHA",
            &mut self.smoothing.impedance_alpha,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        BodyMetricsConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = BodyMetricsConfig::default();
        config.matching.weight_share = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));

        let mut config = BodyMetricsConfig::default();
        config.smoothing.impedance_alpha = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = BodyMetricsConfig::default();
        config.matching.weight_tolerance_kg = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let mut config = BodyMetricsConfig::default();
        config.matching.min_confidence = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_alpha_of_one_is_allowed() {
        let mut config = BodyMetricsConfig::default();
        config.smoothing.weight_alpha = 1.0;
        assert!(config.validate().is_ok());
    }
}
