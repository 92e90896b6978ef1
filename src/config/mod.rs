// ABOUTME: Configuration module for the body metrics engine
// ABOUTME: Exposes matcher and smoothing tuning loaded from defaults and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Intelligence**: identity matching tolerances and EMA smoothing factors

/// Matcher and smoothing configuration
pub mod intelligence;

pub use intelligence::{BodyMetricsConfig, ConfigError, MatchingConfig, SmoothingConfig};
