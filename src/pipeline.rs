// ABOUTME: Reading pipeline orchestrating validation, identity matching, smoothing and composition
// ABOUTME: Commits a profile's smoothing state only after its metrics were computed successfully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reading Pipeline
//!
//! One pass per sample, no retries:
//!
//! 1. Validate the sample. Invalid readings are rejected and touch no state.
//! 2. Match against the store using the *pre-update* smoothed impedance.
//! 3. Unmatched readings produce [`ReadingOutcome::Unidentified`] and touch no state.
//! 4. Matched readings are smoothed, analyzed on the *post-update* values,
//!    written to the [`SmoothingStateSink`] and committed to the store.

use body_metrics_core::errors::{AppError, AppResult};
use body_metrics_core::models::{PersonProfile, ProfileId, RawSample, SmoothingState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::intelligence::{BodyMetricsConfig, SmoothingConfig};
use crate::intelligence::algorithms::ema::smooth;
use crate::intelligence::composition::{self, BodyComposition};
use crate::intelligence::matcher::{MatchOutcome, MatchResult, Matcher, ProfileScore};
use crate::logging::AppLogger;
use crate::store::ProfileStore;

/// Write-back hook for smoothing state
///
/// Called once per identified reading, before the store is updated. An error
/// aborts the reading and leaves the store unchanged.
pub trait SmoothingStateSink {
    /// Persist the new smoothing state of one profile
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot persist the state
    fn persist(&mut self, profile_id: ProfileId, state: &SmoothingState) -> AppResult<()>;
}

impl<F> SmoothingStateSink for F
where
    F: FnMut(ProfileId, &SmoothingState) -> AppResult<()>,
{
    fn persist(&mut self, profile_id: ProfileId, state: &SmoothingState) -> AppResult<()> {
        self(profile_id, state)
    }
}

/// Sink for hosts that persist the store snapshot themselves
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SmoothingStateSink for NoopSink {
    fn persist(&mut self, _profile_id: ProfileId, _state: &SmoothingState) -> AppResult<()> {
        Ok(())
    }
}

/// Metrics emitted for an identified reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Identified profile
    pub profile_id: ProfileId,
    /// Display name of the identified profile
    pub profile_name: String,
    /// Match confidence (0-100)
    pub confidence: f64,
    /// Smoothed weight (kg)
    pub weight_kg: f64,
    /// Smoothed impedance (ohm), present only when this reading carried impedance
    pub impedance_ohm: Option<f64>,
    /// Derived metrics from the smoothed values
    #[serde(flatten)]
    pub composition: BodyComposition,
    /// When the reading was taken
    pub measured_at: DateTime<Utc>,
}

/// Result of processing one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReadingOutcome {
    /// The reading was attributed to a profile
    Identified(MetricRecord),
    /// No profile cleared the confidence cut-off
    Unidentified {
        /// Best score found (0 when no profile is enrolled)
        confidence: f64,
        /// Per-candidate score breakdown
        candidates: Vec<ProfileScore>,
    },
}

impl ReadingOutcome {
    /// Confidence of the outcome
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::Identified(record) => record.confidence,
            Self::Unidentified { confidence, .. } => *confidence,
        }
    }

    /// Metrics, if a profile was identified
    #[must_use]
    pub const fn record(&self) -> Option<&MetricRecord> {
        match self {
            Self::Identified(record) => Some(record),
            Self::Unidentified { .. } => None,
        }
    }
}

/// Orchestrates matcher, smoother and composition calculator
#[derive(Debug, Clone)]
pub struct ReadingPipeline {
    matcher: Matcher,
    smoothing: SmoothingConfig,
}

impl Default for ReadingPipeline {
    fn default() -> Self {
        Self::new(BodyMetricsConfig::default())
    }
}

impl ReadingPipeline {
    /// Create a pipeline from validated configuration
    #[must_use]
    pub fn new(config: BodyMetricsConfig) -> Self {
        Self {
            matcher: Matcher::new(config.matching),
            smoothing: config.smoothing,
        }
    }

    /// Matcher used by this pipeline
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Process one reading without a write-back hook
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidSample` for a non-positive or non-finite weight, or
    /// `ErrorCode::PreconditionViolation` if the matched profile cannot be analyzed
    pub fn process_reading(
        &self,
        store: &mut ProfileStore,
        sample: RawSample,
    ) -> AppResult<ReadingOutcome> {
        self.process_reading_with_sink(store, sample, &mut NoopSink)
    }

    /// Process one reading and hand the new smoothing state to `sink`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidSample` for a non-positive or non-finite weight,
    /// `ErrorCode::PreconditionViolation` if the matched profile cannot be analyzed,
    /// or whatever error the sink reports. The store is unchanged on error.
    pub fn process_reading_with_sink(
        &self,
        store: &mut ProfileStore,
        sample: RawSample,
        sink: &mut dyn SmoothingStateSink,
    ) -> AppResult<ReadingOutcome> {
        if let Err(e) = sample.validate() {
            AppLogger::log_reading_rejected(&e.message);
            return Err(e);
        }

        let MatchResult {
            outcome,
            confidence,
            candidates,
        } = self.matcher.match_sample(&sample, store.iter());

        let MatchOutcome::Matched { profile_id } = outcome else {
            AppLogger::log_reading_unidentified(confidence, candidates.len());
            return Ok(ReadingOutcome::Unidentified {
                confidence,
                candidates,
            });
        };

        let profile = store.get(profile_id).ok_or_else(|| {
            AppError::internal(format!("matched profile {profile_id} missing from store"))
        })?;
        let (next_state, record) = self.analyze(profile, &sample, confidence)?;

        sink.persist(profile_id, &next_state).inspect_err(|e| {
            warn!(profile.id = %profile_id, error = %e, "Smoothing state write-back failed");
        })?;
        store.commit_smoothing(profile_id, next_state)?;

        AppLogger::log_reading_identified(
            profile_id,
            confidence,
            record.composition.impedance.is_some(),
        );
        Ok(ReadingOutcome::Identified(record))
    }

    /// Smooth the sample into the profile's state and derive metrics, without committing
    fn analyze(
        &self,
        profile: &PersonProfile,
        sample: &RawSample,
        confidence: f64,
    ) -> AppResult<(SmoothingState, MetricRecord)> {
        let previous = profile.smoothing;
        let weight_kg = smooth(previous.weight_kg, sample.weight_kg, self.smoothing.weight_alpha);
        let impedance_ohm = sample.usable_impedance().map(|raw| {
            smooth(previous.impedance_ohm, raw, self.smoothing.impedance_alpha)
        });

        let next_state = SmoothingState {
            weight_kg: Some(weight_kg),
            impedance_ohm: impedance_ohm.or(previous.impedance_ohm),
        };

        debug!(
            profile.id = %profile.id,
            raw.weight_kg = sample.weight_kg,
            smoothed.weight_kg = weight_kg,
            smoothed.impedance_ohm = ?impedance_ohm,
            "Smoothed reading"
        );

        let composition = composition::compute(weight_kg, impedance_ohm, &profile.attributes)
            .map_err(|e| e.with_profile_id(profile.id))?;

        let record = MetricRecord {
            profile_id: profile.id,
            profile_name: profile.name().to_owned(),
            confidence,
            weight_kg,
            impedance_ohm,
            composition,
            measured_at: sample.timestamp,
        };
        Ok((next_state, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use body_metrics_core::errors::ErrorCode;
    use body_metrics_core::models::{PersonAttributes, Sex};

    fn store_with(weight: f64) -> (ProfileStore, ProfileId) {
        let mut store = ProfileStore::new();
        let id = store
            .enroll(PersonAttributes::new("Solo", weight, 175.0, 30, Sex::Male).unwrap())
            .unwrap();
        (store, id)
    }

    #[test]
    fn test_first_reading_seeds_state() {
        let (mut store, id) = store_with(70.0);
        let pipeline = ReadingPipeline::default();

        let outcome = pipeline
            .process_reading(&mut store, RawSample::new(70.4, Some(500.0)))
            .unwrap();
        let record = outcome.record().unwrap();
        assert_eq!(record.weight_kg.to_bits(), 70.4f64.to_bits());
        assert_eq!(record.impedance_ohm, Some(500.0));

        let state = store.get(id).unwrap().smoothing;
        assert_eq!(state.weight_kg, Some(70.4));
        assert_eq!(state.impedance_ohm, Some(500.0));
    }

    #[test]
    fn test_reading_without_impedance_keeps_impedance_history() {
        let (mut store, id) = store_with(70.0);
        let pipeline = ReadingPipeline::default();
        pipeline
            .process_reading(&mut store, RawSample::new(70.0, Some(500.0)))
            .unwrap();

        let outcome = pipeline
            .process_reading(&mut store, RawSample::new(71.0, None))
            .unwrap();
        let record = outcome.record().unwrap();
        assert!(record.impedance_ohm.is_none());
        assert!(record.composition.impedance.is_none());
        assert_eq!(store.get(id).unwrap().smoothing.impedance_ohm, Some(500.0));
    }

    #[test]
    fn test_sink_failure_leaves_store_unchanged() {
        let (mut store, id) = store_with(70.0);
        let pipeline = ReadingPipeline::default();
        let mut failing =
            |_: ProfileId, _: &SmoothingState| -> AppResult<()> { Err(AppError::storage("disk full")) };

        let err = pipeline
            .process_reading_with_sink(&mut store, RawSample::new(70.0, None), &mut failing)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(store.get(id).unwrap().smoothing, SmoothingState::default());
    }

    #[test]
    fn test_sink_receives_committed_state() {
        let (mut store, id) = store_with(70.0);
        let pipeline = ReadingPipeline::default();
        let mut persisted = Vec::new();
        let mut sink = |profile_id: ProfileId, state: &SmoothingState| -> AppResult<()> {
            persisted.push((profile_id, *state));
            Ok(())
        };

        pipeline
            .process_reading_with_sink(&mut store, RawSample::new(69.0, None), &mut sink)
            .unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].0, id);
        assert_eq!(persisted[0].1, store.get(id).unwrap().smoothing);
    }
}
