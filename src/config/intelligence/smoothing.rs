// ABOUTME: Smoothing configuration for per-person exponential moving averages
// ABOUTME: Holds independent smoothing factors for weight and impedance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use body_metrics_core::constants::smoothing::{DEFAULT_IMPEDANCE_ALPHA, DEFAULT_WEIGHT_ALPHA};
use serde::{Deserialize, Serialize};

/// EMA smoothing factors, each in (0, 1]
///
/// Smaller values reject more noise and react more slowly to real change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Smoothing factor for weight
    pub weight_alpha: f64,
    /// Smoothing factor for impedance
    pub impedance_alpha: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            weight_alpha: DEFAULT_WEIGHT_ALPHA,
            impedance_alpha: DEFAULT_IMPEDANCE_ALPHA,
        }
    }
}
