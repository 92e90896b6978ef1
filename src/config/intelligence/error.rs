// ABOUTME: Configuration error types for body metrics tuning validation
// ABOUTME: Defines error variants for invalid ranges, weight splits, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for tuning validation.

use body_metrics_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., tolerance not positive)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Score weights outside the unit interval
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
