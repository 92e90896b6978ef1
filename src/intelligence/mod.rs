// ABOUTME: Body metrics intelligence: identity matching and body composition analysis
// ABOUTME: Hosts the matcher, the composition calculator and the underlying algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence module
//!
//! - `matcher` - attributes anonymous readings to enrolled profiles
//! - `composition` - derives every metric for one measurement
//! - `body_type` - nine-way body type classification
//! - `algorithms` - EMA, BIA and anthropometric formulas

/// EMA, BIA and anthropometric formulas
pub mod algorithms;
/// Body type classification
pub mod body_type;
/// Body composition calculator
pub mod composition;
/// Identity matcher
pub mod matcher;

pub use body_type::BodyType;
pub use composition::{compute, BodyComposition, ImpedanceMetrics};
pub use matcher::{MatchOutcome, MatchResult, Matcher, ProfileScore};
