// ABOUTME: Main library entry point for the household body metrics engine
// ABOUTME: Identifies who stepped on the scale and derives smoothed body composition metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Metrics
//!
//! Attributes anonymous bathroom-scale readings to enrolled household members
//! and turns each attributed reading into smoothed body composition metrics.
//!
//! ## Architecture
//!
//! - **Store**: enrolled profiles and their per-person smoothing state
//! - **Intelligence**: identity matcher, BIA and anthropometric formulas
//! - **Pipeline**: validate, match, smooth, analyze, commit
//! - **Sensors**: parsing of host sensor state strings
//! - **Config**: matcher and smoothing tuning with environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use body_metrics::models::{PersonAttributes, RawSample, Sex};
//! use body_metrics::pipeline::{ReadingOutcome, ReadingPipeline};
//! use body_metrics::store::ProfileStore;
//!
//! # fn main() -> body_metrics::errors::AppResult<()> {
//! let mut store = ProfileStore::new();
//! let alice = store.enroll(PersonAttributes::new("Alice", 60.0, 165.0, 34, Sex::Female)?)?;
//! store.enroll(PersonAttributes::new("Bob", 85.0, 182.0, 41, Sex::Male)?)?;
//!
//! let pipeline = ReadingPipeline::default();
//! let outcome = pipeline.process_reading(&mut store, RawSample::new(61.0, Some(520.0)))?;
//!
//! if let ReadingOutcome::Identified(record) = outcome {
//!     assert_eq!(record.profile_id, alice);
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;

/// Tuning constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Body composition algorithms and identity matching
pub mod intelligence;

/// Logging configuration and structured event helpers
pub mod logging;

/// Profile, sample and smoothing state models
pub mod models;

/// Reading pipeline orchestration
pub mod pipeline;

/// Sensor state parsing
pub mod sensors;

/// Profile store
pub mod store;
