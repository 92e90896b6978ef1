// ABOUTME: Exponential moving average used to smooth per-person weight and impedance
// ABOUTME: Seeds on the first observation and stays inside the previous/raw interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Smooth one new observation against the previous smoothed value
///
/// `EMA_t = α x raw + (1-α) x EMA_{t-1}`. When there is no previous value the
/// raw observation is returned unchanged.
///
/// `alpha` must lie in (0, 1]; `BodyMetricsConfig::validate` enforces this for
/// the configured factors.
#[must_use]
pub fn smooth(previous: Option<f64>, raw: f64, alpha: f64) -> f64 {
    debug_assert!(
        alpha > 0.0 && alpha <= 1.0,
        "EMA alpha must be in range (0.0, 1.0], got {alpha}"
    );

    let Some(previous) = previous else {
        return raw;
    };

    // Written as prev + α(raw - prev) so equal inputs come back unchanged.
    let smoothed = alpha.mul_add(raw - previous, previous);

    // Rounding can land one ulp outside the interval.
    smoothed.clamp(previous.min(raw), previous.max(raw))
}
