// ABOUTME: Parses host sensor state strings such as "75.5 kg" into scale readings
// ABOUTME: Unavailable or unparseable impedance is treated as absent; weight is mandatory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use body_metrics_core::constants::sensor_states::{UNAVAILABLE, UNKNOWN};
use body_metrics_core::errors::{AppError, AppResult};
use body_metrics_core::models::RawSample;
use regex::Regex;
use tracing::debug;

/// Leading number of a sensor state, with an optional unit after it
/// Stored as Option so a pattern failure degrades to "unparseable" instead of panicking
static LEADING_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 75.5, 75,5 kg, .5, -3, 512 Ω
    // Group 2 catches a second separator such as 1,234.5
    Regex::new(r"^\s*([+-]?\d*[.,]?\d+)([.,]\d)?").ok()
});

/// Numeric value of a sensor state
///
/// Returns `None` for `unknown`, `unavailable`, empty strings and anything
/// that does not start with a number. A single `.` or `,` is read as the
/// decimal separator; numbers with thousands separators such as `1,234.5`
/// are rejected.
#[must_use]
pub fn parse_state_value(state: &str) -> Option<f64> {
    let trimmed = state.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case(UNKNOWN)
        || trimmed.eq_ignore_ascii_case(UNAVAILABLE)
    {
        return None;
    }

    let captures = LEADING_NUMBER.as_ref()?.captures(trimmed)?;
    if captures.get(2).is_some() {
        return None;
    }
    let number = captures.get(1)?.as_str().replace(',', ".");
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Build a reading from the weight and optional impedance sensor states
///
/// Non-positive impedance is dropped: scales report 0 when there was no
/// bare-foot contact.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidSample` if the weight state is unavailable,
/// unparseable, or not a positive number
pub fn sample_from_states(weight_state: &str, impedance_state: Option<&str>) -> AppResult<RawSample> {
    let weight_kg = parse_state_value(weight_state).ok_or_else(|| {
        AppError::invalid_sample(format!("weight state '{weight_state}' is not a number"))
    })?;

    let impedance_ohm = impedance_state
        .and_then(parse_state_value)
        .filter(|value| *value > 0.0);
    if impedance_state.is_some() && impedance_ohm.is_none() {
        debug!(
            sensor.impedance_state = ?impedance_state,
            "Ignoring unusable impedance state"
        );
    }

    let sample = RawSample::new(weight_kg, impedance_ohm);
    sample.validate()?;
    Ok(sample)
}
