// ABOUTME: Profile management commands for body-metrics
// ABOUTME: Handles list, add, remove, and smoothing reset against the profiles file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use body_metrics::errors::AppResult;
use body_metrics::models::{PersonAttributes, Sex};
use tracing::info;

use crate::helpers::display::{display_profiles, print_json};
use crate::helpers::profiles_file;

type Result<T> = AppResult<T>;

/// List enrolled profiles
pub fn list(path: &Path, json: bool) -> Result<()> {
    let store = profiles_file::load(path)?;
    if json {
        print_json(&store)
    } else {
        display_profiles(&store);
        Ok(())
    }
}

/// Enroll a new profile
pub fn add(
    path: &Path,
    name: String,
    weight: f64,
    height: f64,
    age: u32,
    sex: Sex,
    tolerance: Option<f64>,
) -> Result<()> {
    let mut attributes = PersonAttributes::new(name, weight, height, age, sex)?;
    if let Some(tolerance) = tolerance {
        attributes = attributes.with_weight_tolerance(tolerance)?;
    }

    let mut store = profiles_file::load(path)?;
    let id = store.enroll(attributes)?;
    profiles_file::save(path, &store)?;

    info!(profile.id = %id, "Profile enrolled");
    println!("Enrolled profile {id}");
    Ok(())
}

/// Remove a profile and its smoothing state
pub fn remove(path: &Path, reference: &str) -> Result<()> {
    let mut store = profiles_file::load(path)?;
    let id = profiles_file::resolve(&store, reference)?;
    let removed = store.remove(id)?;
    profiles_file::save(path, &store)?;

    println!("Removed profile {id} ({})", removed.name());
    Ok(())
}

/// Forget a profile's smoothing history
pub fn reset(path: &Path, reference: &str) -> Result<()> {
    let mut store = profiles_file::load(path)?;
    let id = profiles_file::resolve(&store, reference)?;
    store.reset_smoothing(id)?;
    profiles_file::save(path, &store)?;

    println!("Reset smoothing state of profile {id}");
    Ok(())
}
