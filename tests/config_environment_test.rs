// ABOUTME: Tests for body metrics configuration loading from environment variables
// ABOUTME: Runs serially because environment variables are process-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;

use body_metrics::config::{BodyMetricsConfig, ConfigError};
use body_metrics::errors::{AppError, ErrorCode};
use serial_test::serial;

const VARS: [&str; 6] = [
    "BODY_METRICS_WEIGHT_TOLERANCE_KG",
    "BODY_METRICS_IMPEDANCE_TOLERANCE_OHM",
    "BODY_METRICS_WEIGHT_SHARE",
    "BODY_METRICS_MIN_CONFIDENCE",
    "BODY_METRICS_WEIGHT_ALPHA",
    "BODY_METRICS_IMPEDANCE_ALPHA",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = BodyMetricsConfig::load().unwrap();
    assert_eq!(config, BodyMetricsConfig::default());
    assert!((config.matching.weight_tolerance_kg - 8.0).abs() < f64::EPSILON);
    assert!((config.matching.impedance_tolerance_ohm - 50.0).abs() < f64::EPSILON);
    assert!((config.matching.weight_share - 0.7).abs() < f64::EPSILON);
    assert!((config.matching.min_confidence - 50.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("BODY_METRICS_WEIGHT_TOLERANCE_KG", "5.5");
    env::set_var("BODY_METRICS_MIN_CONFIDENCE", " 65 ");
    env::set_var("BODY_METRICS_WEIGHT_ALPHA", "0.35");

    let config = BodyMetricsConfig::load().unwrap();
    clear_env();

    assert!((config.matching.weight_tolerance_kg - 5.5).abs() < f64::EPSILON);
    assert!((config.matching.min_confidence - 65.0).abs() < f64::EPSILON);
    assert!((config.smoothing.weight_alpha - 0.35).abs() < f64::EPSILON);
    assert!((config.smoothing.impedance_alpha - 0.2).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_value_is_parse_error() {
    clear_env();
    env::set_var("BODY_METRICS_WEIGHT_SHARE", "seventy");
    let err = BodyMetricsConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Parse(_)));
    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_out_of_range_value_fails_validation() {
    clear_env();
    env::set_var("BODY_METRICS_IMPEDANCE_ALPHA", "1.5");
    let err = BodyMetricsConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
}
