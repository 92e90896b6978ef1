// ABOUTME: Identity matcher assigning anonymous scale readings to enrolled household members
// ABOUTME: Scores weight and impedance closeness per profile and applies a confidence cut-off
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Identity Matcher
//!
//! Every profile gets a closeness score in `[0, 1]` per signal:
//!
//! ```text
//! closeness = max(0, 1 - |sample - reference| / tolerance)
//! ```
//!
//! Weight is compared with the profile's expected weight and is always used.
//! Impedance is compared with the profile's smoothed impedance and is used only
//! when the sample carries one and the profile has impedance history. The
//! combined score is reported as a percentage. It is a heuristic confidence,
//! not a probability.

use body_metrics_core::constants::matching::MAX_CONFIDENCE;
use body_metrics_core::models::{PersonProfile, ProfileId, RawSample};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::MatchingConfig;

/// Whether a reading was attributed to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The best candidate cleared the confidence cut-off
    Matched {
        /// Identified profile
        profile_id: ProfileId,
    },
    /// No profile cleared the cut-off, or none are enrolled
    Unmatched,
}

/// Score components for one candidate profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    /// Candidate profile
    pub profile_id: ProfileId,
    /// Weight closeness in [0, 1]
    pub weight_closeness: f64,
    /// Impedance closeness in [0, 1], absent when the signal was not usable
    pub impedance_closeness: Option<f64>,
    /// Combined score in [0, 100]
    pub score: f64,
}

/// Result of matching one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched profile or no match
    pub outcome: MatchOutcome,
    /// Best score found, in [0, 100]
    pub confidence: f64,
    /// Per-candidate breakdown, in evaluation order
    pub candidates: Vec<ProfileScore>,
}

impl MatchResult {
    /// Identified profile, if any
    #[must_use]
    pub const fn profile_id(&self) -> Option<ProfileId> {
        match self.outcome {
            MatchOutcome::Matched { profile_id } => Some(profile_id),
            MatchOutcome::Unmatched => None,
        }
    }

    /// Whether a profile was identified
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Matched { .. })
    }
}

/// Weighted-score identity matcher
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    /// Create a matcher with validated tuning
    #[must_use]
    pub const fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    #[must_use]
    pub const fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score a sample against every profile and pick the best candidate
    ///
    /// Equal top scores resolve to the smaller profile id.
    pub fn match_sample<'a, I>(&self, sample: &RawSample, profiles: I) -> MatchResult
    where
        I: IntoIterator<Item = &'a PersonProfile>,
    {
        let sample_impedance = sample.usable_impedance();
        let candidates: Vec<ProfileScore> = profiles
            .into_iter()
            .map(|profile| self.score_profile(sample.weight_kg, sample_impedance, profile))
            .collect();

        let best = candidates.iter().max_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| b.profile_id.cmp(&a.profile_id))
        });

        let (outcome, confidence) = match best {
            Some(best) if best.score > self.config.min_confidence => (
                MatchOutcome::Matched {
                    profile_id: best.profile_id,
                },
                best.score,
            ),
            Some(best) => (MatchOutcome::Unmatched, best.score),
            None => (MatchOutcome::Unmatched, 0.0),
        };

        debug!(
            sample.weight_kg = sample.weight_kg,
            sample.has_impedance = sample_impedance.is_some(),
            candidates = candidates.len(),
            confidence,
            matched = ?outcome,
            "Scored reading against enrolled profiles"
        );

        MatchResult {
            outcome,
            confidence,
            candidates,
        }
    }

    fn score_profile(
        &self,
        weight_kg: f64,
        sample_impedance: Option<f64>,
        profile: &PersonProfile,
    ) -> ProfileScore {
        let weight_tolerance = profile
            .attributes
            .weight_tolerance_kg()
            .unwrap_or(self.config.weight_tolerance_kg);
        let weight_closeness = closeness(
            weight_kg,
            profile.attributes.expected_weight_kg(),
            weight_tolerance,
        );

        // Profiles without impedance history are scored on weight alone.
        let impedance_closeness = sample_impedance
            .zip(profile.smoothing.impedance_ohm)
            .map(|(sample_z, smoothed_z)| {
                closeness(sample_z, smoothed_z, self.config.impedance_tolerance_ohm)
            });

        let combined = impedance_closeness.map_or(weight_closeness, |z| {
            self.config
                .weight_share
                .mul_add(weight_closeness, self.config.impedance_share() * z)
        });

        ProfileScore {
            profile_id: profile.id,
            weight_closeness,
            impedance_closeness,
            score: (combined * MAX_CONFIDENCE).clamp(0.0, MAX_CONFIDENCE),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

/// Linear closeness in [0, 1]: 1 at equality, 0 at or beyond the tolerance
fn closeness(value: f64, reference: f64, tolerance: f64) -> f64 {
    (1.0 - (value - reference).abs() / tolerance).max(0.0)
}
