// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides household profile fixtures and sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `body_metrics`

use body_metrics::models::{PersonAttributes, ProfileId, RawSample, Sex, SmoothingState};
use body_metrics::store::ProfileStore;
use chrono::{TimeZone, Utc};

/// Validated attributes with a default height and age for the given sex
pub fn attributes(name: &str, expected_weight_kg: f64, sex: Sex) -> PersonAttributes {
    let height = match sex {
        Sex::Male => 180.0,
        Sex::Female => 165.0,
    };
    PersonAttributes::new(name, expected_weight_kg, height, 35, sex).unwrap()
}

/// Two-person household: Alice (60 kg) enrolled before Bob (85 kg)
pub struct Household {
    pub store: ProfileStore,
    pub alice: ProfileId,
    pub bob: ProfileId,
}

pub fn household() -> Household {
    let mut store = ProfileStore::new();
    let alice = store
        .enroll(attributes("Alice", 60.0, Sex::Female))
        .unwrap();
    let bob = store.enroll(attributes("Bob", 85.0, Sex::Male)).unwrap();
    Household { store, alice, bob }
}

/// Sample with a fixed timestamp so results compare equal across calls
pub fn sample(weight_kg: f64, impedance_ohm: Option<f64>) -> RawSample {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap();
    RawSample::at(weight_kg, impedance_ohm, timestamp)
}

pub const fn smoothing(weight_kg: Option<f64>, impedance_ohm: Option<f64>) -> SmoothingState {
    SmoothingState {
        weight_kg,
        impedance_ohm,
    }
}
