// ABOUTME: Reading command for body-metrics
// ABOUTME: Parses sensor states, runs the pipeline, prints the outcome, and saves smoothing state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use body_metrics::config::BodyMetricsConfig;
use body_metrics::errors::AppResult;
use body_metrics::pipeline::{ReadingOutcome, ReadingPipeline};
use body_metrics::sensors::sample_from_states;

use crate::helpers::display::print_json;
use crate::helpers::profiles_file;

/// Process one reading against the stored profiles
pub fn process(
    path: &Path,
    config: BodyMetricsConfig,
    weight_state: &str,
    impedance_state: Option<&str>,
) -> AppResult<()> {
    let sample = sample_from_states(weight_state, impedance_state)?;
    let mut store = profiles_file::load(path)?;

    let pipeline = ReadingPipeline::new(config);
    let outcome = pipeline.process_reading(&mut store, sample)?;

    // Only identified readings change smoothing state.
    if matches!(outcome, ReadingOutcome::Identified(_)) {
        profiles_file::save(path, &store)?;
    }

    print_json(&outcome)
}
