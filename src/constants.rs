// ABOUTME: Re-exports tuning constants from body-metrics-core
// ABOUTME: Matching, smoothing, sensor state and service name defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use body_metrics_core::constants::*;
