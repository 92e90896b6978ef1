// ABOUTME: Default tuning constants for matching, smoothing, and sensor state handling
// ABOUTME: Values are product calibration defaults and can be overridden through configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Identity matching defaults
pub mod matching {
    /// Weight difference (kg) at which the weight closeness reaches zero
    pub const DEFAULT_WEIGHT_TOLERANCE_KG: f64 = 8.0;

    /// Impedance difference (ohm) at which the impedance closeness reaches zero
    pub const DEFAULT_IMPEDANCE_TOLERANCE_OHM: f64 = 50.0;

    /// Share of the combined score taken by weight when impedance is usable
    pub const DEFAULT_WEIGHT_SHARE: f64 = 0.7;

    /// Score (0-100) the best candidate must exceed to count as identified
    pub const DEFAULT_MIN_CONFIDENCE: f64 = 50.0;

    /// Upper bound of the confidence scale
    pub const MAX_CONFIDENCE: f64 = 100.0;
}

/// Exponential moving average defaults
pub mod smoothing {
    /// Smoothing factor applied to weight
    pub const DEFAULT_WEIGHT_ALPHA: f64 = 0.2;

    /// Smoothing factor applied to impedance
    pub const DEFAULT_IMPEDANCE_ALPHA: f64 = 0.2;
}

/// Host sensor state literals
pub mod sensor_states {
    /// Sensor has never reported
    pub const UNKNOWN: &str = "unknown";

    /// Sensor is offline
    pub const UNAVAILABLE: &str = "unavailable";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the engine in log output
    pub const BODY_METRICS: &str = "body-metrics";
}
