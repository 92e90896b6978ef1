// ABOUTME: Body composition calculator combining anthropometric indices and BIA regressions
// ABOUTME: Impedance-derived metrics are present only when an impedance value is supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Calculator
//!
//! Stateless entry point that turns one (weight, impedance?) pair and a
//! person's attributes into every derived metric. Without impedance only the
//! weight/height indices are produced; the BIA block is `None`, which callers
//! should present as "requires impedance" rather than as a failure.

use body_metrics_core::errors::{AppError, AppResult};
use body_metrics_core::models::PersonAttributes;
use serde::{Deserialize, Serialize};

use super::algorithms::anthropometrics::{
    basal_metabolic_rate, bmi, ideal_weight_kg, visceral_fat_rating,
};
use super::algorithms::bia::{self, BiaInput};
use super::body_type::BodyType;

/// Metrics that require an impedance measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpedanceMetrics {
    /// Body fat (% of body weight)
    pub body_fat_pct: f64,
    /// Muscle mass (kg)
    pub muscle_mass_kg: f64,
    /// Body water (% of body weight)
    pub water_pct: f64,
    /// Bone mass (kg)
    pub bone_mass_kg: f64,
    /// Visceral fat rating
    pub visceral_fat_rating: f64,
    /// Body type classification, absent if the muscle ratio is undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
}

/// Every metric derived from one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Body Mass Index (kg/m^2)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: f64,
    /// Ideal weight for the person's height and sex (kg)
    pub ideal_weight_kg: f64,
    /// Impedance-derived metrics
    #[serde(flatten)]
    pub impedance: Option<ImpedanceMetrics>,
}

/// Compute body composition for one measurement
///
/// # Errors
///
/// Returns `ErrorCode::PreconditionViolation` if the weight, the profile's height or age,
/// or a supplied impedance is zero, negative or not finite
pub fn compute(
    weight_kg: f64,
    impedance_ohm: Option<f64>,
    attributes: &PersonAttributes,
) -> AppResult<BodyComposition> {
    let height_cm = attributes.height_cm();
    let age_years = attributes.age_years();
    let sex = attributes.sex();

    let bmi = bmi(weight_kg, height_cm)?;

    let impedance = impedance_ohm
        .map(|z| {
            let input = BiaInput::new(weight_kg, z, attributes)?;
            let metrics = bia::analyze(&input);
            Ok::<_, AppError>(ImpedanceMetrics {
                body_fat_pct: metrics.body_fat_pct,
                muscle_mass_kg: metrics.muscle_mass_kg,
                water_pct: metrics.water_pct,
                bone_mass_kg: metrics.bone_mass_kg,
                visceral_fat_rating: visceral_fat_rating(weight_kg, height_cm, age_years, sex),
                body_type: BodyType::classify(
                    metrics.body_fat_pct,
                    metrics.muscle_mass_kg,
                    weight_kg,
                    sex,
                ),
            })
        })
        .transpose()?;

    Ok(BodyComposition {
        bmi,
        bmr_kcal: basal_metabolic_rate(weight_kg, height_cm, age_years, sex),
        ideal_weight_kg: ideal_weight_kg(height_cm, sex),
        impedance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use body_metrics_core::errors::ErrorCode;
    use body_metrics_core::models::Sex;

    fn attrs() -> PersonAttributes {
        PersonAttributes::new("Alice", 60.0, 165.0, 34, Sex::Female).unwrap()
    }

    #[test]
    fn test_without_impedance_only_weight_metrics() {
        let composition = compute(61.0, None, &attrs()).unwrap();
        assert!(composition.impedance.is_none());
        assert!((composition.bmi - 61.0 / (1.65 * 1.65)).abs() < 1e-9);

        let json = serde_json::to_value(composition).unwrap();
        assert!(json.get("body_fat_pct").is_none());
        assert!(json.get("muscle_mass_kg").is_none());
        assert!(json.get("water_pct").is_none());
        assert!(json.get("bone_mass_kg").is_none());
        assert!(json.get("bmi").is_some());
    }

    #[test]
    fn test_with_impedance_all_metrics_present() {
        let composition = compute(61.0, Some(530.0), &attrs()).unwrap();
        let metrics = composition.impedance.unwrap();
        assert!(metrics.body_fat_pct > 0.0);
        assert!(metrics.muscle_mass_kg > 0.0);
        assert!(metrics.water_pct > 0.0);
        assert!(metrics.bone_mass_kg > 0.0);
        assert!(metrics.body_type.is_some());

        let json = serde_json::to_value(composition).unwrap();
        assert!(json.get("body_fat_pct").is_some());
    }

    #[test]
    fn test_zero_impedance_is_precondition_violation() {
        let err = compute(61.0, Some(0.0), &attrs()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionViolation);
    }
}
