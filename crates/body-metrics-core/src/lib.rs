// ABOUTME: Core types and constants for the body metrics scale engine
// ABOUTME: Foundation crate with error handling, profile and sample models, and tuning defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics Core
//!
//! Foundation crate providing shared types and constants for the body metrics
//! engine. Everything here is plain data: the matching, smoothing and
//! body-composition algorithms live in the `body_metrics` crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Person profiles, smoothing state and raw scale samples
//! - **constants**: Default tuning values and sensor state literals

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`PersonProfile`, `RawSample`, `Sex`, etc.)
pub mod models;

/// Default tuning constants organized by domain
pub mod constants;
