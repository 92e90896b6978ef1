// ABOUTME: Identity matching configuration for scoring readings against enrolled profiles
// ABOUTME: Configures tolerance windows, weight/impedance split, and the confidence cut-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Matching Configuration
//!
//! Tolerances and the score split are product tuning constants. They are not
//! derived from any formal source and are expected to be calibrated per
//! household.

use body_metrics_core::constants::matching::{
    DEFAULT_IMPEDANCE_TOLERANCE_OHM, DEFAULT_MIN_CONFIDENCE, DEFAULT_WEIGHT_SHARE,
    DEFAULT_WEIGHT_TOLERANCE_KG,
};
use serde::{Deserialize, Serialize};

/// Identity matcher tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Weight difference (kg) at which weight closeness drops to zero
    pub weight_tolerance_kg: f64,
    /// Impedance difference (ohm) at which impedance closeness drops to zero
    pub impedance_tolerance_ohm: f64,
    /// Share of the combined score given to weight when impedance is usable (0-1)
    pub weight_share: f64,
    /// Score (0-100) the best candidate must strictly exceed to be identified
    pub min_confidence: f64,
}

impl MatchingConfig {
    /// Share of the combined score given to impedance when it is usable
    #[must_use]
    pub fn impedance_share(&self) -> f64 {
        1.0 - self.weight_share
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weight_tolerance_kg: DEFAULT_WEIGHT_TOLERANCE_KG,
            impedance_tolerance_ohm: DEFAULT_IMPEDANCE_TOLERANCE_OHM,
            weight_share: DEFAULT_WEIGHT_SHARE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}
