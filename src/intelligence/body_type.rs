// ABOUTME: Nine-way body type classification from body fat percentage and muscle ratio
// ABOUTME: Uses sex-specific fat and muscle thresholds as consumer scales report them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use body_metrics_core::models::Sex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body type derived from fat percentage and muscle-to-weight ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    /// High fat, low muscle
    Obese,
    /// High fat, average muscle
    Overweight,
    /// High fat, high muscle
    ThickSet,
    /// Normal fat, low muscle
    LackOfExercise,
    /// Normal fat, average muscle
    Balanced,
    /// Normal fat, high muscle
    BalancedMuscular,
    /// Low fat, low muscle
    Skinny,
    /// Low fat, average muscle
    BalancedSkinny,
    /// Low fat, high muscle
    SkinnyMuscular,
}

/// Fat percentage and muscle ratio band edges for one sex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTypeThresholds {
    /// Fat % below which fat is low
    pub fat_low_pct: f64,
    /// Fat % above which fat is high
    pub fat_high_pct: f64,
    /// Muscle/weight ratio below which muscle is low
    pub muscle_low_ratio: f64,
    /// Muscle/weight ratio at or above which muscle is high
    pub muscle_high_ratio: f64,
}

impl BodyTypeThresholds {
    /// Thresholds for a sex
    #[must_use]
    pub const fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self {
                fat_low_pct: 15.0,
                fat_high_pct: 25.0,
                muscle_low_ratio: 0.38,
                muscle_high_ratio: 0.46,
            },
            Sex::Female => Self {
                fat_low_pct: 22.0,
                fat_high_pct: 32.0,
                muscle_low_ratio: 0.30,
                muscle_high_ratio: 0.37,
            },
        }
    }
}

#[derive(Clone, Copy)]
enum Band {
    Low,
    Mid,
    High,
}

impl BodyType {
    /// Classify a measurement
    ///
    /// Returns `None` when `weight_kg` is not positive, since the muscle ratio is undefined.
    #[must_use]
    pub fn classify(body_fat_pct: f64, muscle_mass_kg: f64, weight_kg: f64, sex: Sex) -> Option<Self> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return None;
        }
        let t = BodyTypeThresholds::for_sex(sex);
        let ratio = muscle_mass_kg / weight_kg;

        let fat = if body_fat_pct > t.fat_high_pct {
            Band::High
        } else if body_fat_pct >= t.fat_low_pct {
            Band::Mid
        } else {
            Band::Low
        };
        let muscle = if ratio >= t.muscle_high_ratio {
            Band::High
        } else if ratio >= t.muscle_low_ratio {
            Band::Mid
        } else {
            Band::Low
        };

        Some(match (fat, muscle) {
            (Band::High, Band::High) => Self::ThickSet,
            (Band::High, Band::Mid) => Self::Overweight,
            (Band::High, Band::Low) => Self::Obese,
            (Band::Mid, Band::High) => Self::BalancedMuscular,
            (Band::Mid, Band::Mid) => Self::Balanced,
            (Band::Mid, Band::Low) => Self::LackOfExercise,
            (Band::Low, Band::High) => Self::SkinnyMuscular,
            (Band::Low, Band::Mid) => Self::BalancedSkinny,
            (Band::Low, Band::Low) => Self::Skinny,
        })
    }

    /// Label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Obese => "Obese",
            Self::Overweight => "Overweight",
            Self::ThickSet => "Thick-set",
            Self::LackOfExercise => "Lack of exercise",
            Self::Balanced => "Balanced",
            Self::BalancedMuscular => "Balanced-muscular",
            Self::Skinny => "Skinny",
            Self::BalancedSkinny => "Balanced-skinny",
            Self::SkinnyMuscular => "Skinny-muscular",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
