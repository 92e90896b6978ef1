// ABOUTME: Core data models for profiles, smoothing state, and scale readings
// ABOUTME: Re-exports the model types used across the body metrics workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Person profiles, identifiers, sex and smoothing state
pub mod profile;

/// Raw scale readings
pub mod sample;

pub use profile::{PersonAttributes, PersonProfile, ProfileId, Sex, SmoothingState};
pub use sample::RawSample;
