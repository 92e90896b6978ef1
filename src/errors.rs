// ABOUTME: Re-exports error types from body-metrics-core for unified type identity
// ABOUTME: Ensures AppError/ErrorCode are the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use body_metrics_core::errors::*;
