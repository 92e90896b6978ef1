// ABOUTME: Raw scale reading as delivered by the host before identity matching
// ABOUTME: Weight is mandatory and must be positive; impedance is optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// One anonymous reading from the scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Measured weight (kg)
    pub weight_kg: f64,
    /// Measured impedance (ohm), absent when the scale had no bare-foot contact
    pub impedance_ohm: Option<f64>,
    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

impl RawSample {
    /// Reading taken now
    #[must_use]
    pub fn new(weight_kg: f64, impedance_ohm: Option<f64>) -> Self {
        Self::at(weight_kg, impedance_ohm, Utc::now())
    }

    /// Reading taken at a given instant
    #[must_use]
    pub const fn at(weight_kg: f64, impedance_ohm: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            weight_kg,
            impedance_ohm,
            timestamp,
        }
    }

    /// Reject readings that cannot come from a person standing on the scale
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidSample` if the weight is zero, negative or not finite
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_sample(format!(
                "weight must be a positive number, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }

    /// Impedance if it is usable for matching and body composition
    ///
    /// Scales report zero when the feet are not in contact with the electrodes.
    #[must_use]
    pub fn usable_impedance(&self) -> Option<f64> {
        self.impedance_ohm.filter(|z| z.is_finite() && *z > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive_weight() {
        assert!(RawSample::new(0.0, None).validate().is_err());
        assert!(RawSample::new(-3.2, Some(500.0)).validate().is_err());
        assert!(RawSample::new(f64::INFINITY, None).validate().is_err());
        assert!(RawSample::new(72.4, None).validate().is_ok());
    }

    #[test]
    fn test_usable_impedance_ignores_zero() {
        assert_eq!(RawSample::new(70.0, Some(0.0)).usable_impedance(), None);
        assert_eq!(RawSample::new(70.0, Some(480.0)).usable_impedance(), Some(480.0));
        assert_eq!(RawSample::new(70.0, None).usable_impedance(), None);
    }
}
