// ABOUTME: Bioelectrical impedance analysis formulas for body fat, muscle, water, and bone mass
// ABOUTME: Sex-specific coefficient tables feed pure regressions that are never clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bioelectrical Impedance Analysis (BIA)
//!
//! Regressions used by consumer bathroom scales (Xiaomi Mi Body Composition
//! Scale family). Inputs are weight (kg), height (cm), age (years), sex and
//! whole-body impedance (ohm).
//!
//! Outputs are returned exactly as the regressions produce them. A negative
//! fat percentage or a muscle mass above body weight means the inputs are
//! outside the population the regression was fitted on; callers must see that
//! rather than a plausible-looking clamped value.
//!
//! # Formulas
//!
//! ```text
//! LBM    = (h x 9.058 / 100) x (h / 100) + w x 0.32 + 12.226 - Z x 0.0068 - age x 0.0542
//! fat %  = (1 - ((LBM - Z x c_fat / 100 x (30 - age)) / w) x 1.1) x 100
//! bone   = LBM x 0.05158 - c_bone, then +0.1 above 2.2 kg, otherwise -0.1
//! muscle = w - fat% / 100 x w - bone
//! water% = (100 - fat%) x 0.7, then x0.98 above 50 %, otherwise x1.02
//! ```

use body_metrics_core::errors::{AppError, AppResult};
use body_metrics_core::models::{PersonAttributes, Sex};
use serde::{Deserialize, Serialize};

/// Lean body mass regression terms shared by both sexes
mod lbm_terms {
    /// Height-squared coefficient (applied to h x 9.058 / 100 x h / 100)
    pub const HEIGHT_COEF: f64 = 9.058;
    /// Weight coefficient
    pub const WEIGHT_COEF: f64 = 0.32;
    /// Intercept
    pub const INTERCEPT: f64 = 12.226;
    /// Impedance coefficient
    pub const IMPEDANCE_COEF: f64 = 0.0068;
    /// Age coefficient
    pub const AGE_COEF: f64 = 0.0542;
}

/// Fat percentage scaling
const FAT_LBM_SCALE: f64 = 1.1;
/// Age pivot in the fat impedance correction
const FAT_AGE_PIVOT: f64 = 30.0;
/// Bone mass per kg of lean mass
const BONE_LBM_COEF: f64 = 0.05158;
/// Bone mass threshold for the post adjustment
const BONE_ADJUST_THRESHOLD_KG: f64 = 2.2;
/// Bone mass post adjustment
const BONE_ADJUST_KG: f64 = 0.1;
/// Share of fat-free mass that is water
const WATER_FFM_SHARE: f64 = 0.7;
/// Water percentage above which the high correction applies
const WATER_CORRECTION_PIVOT: f64 = 50.0;
/// Correction factor above the pivot
const WATER_CORRECTION_HIGH: f64 = 0.98;
/// Correction factor at or below the pivot
const WATER_CORRECTION_LOW: f64 = 1.02;

/// Sex-specific BIA coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiaCoefficients {
    /// Impedance coefficient in the fat percentage age correction
    pub fat_impedance_coef: f64,
    /// Offset subtracted from the lean-mass bone estimate
    pub bone_offset: f64,
}

/// Male coefficient table
pub const MALE_COEFFICIENTS: BiaCoefficients = BiaCoefficients {
    fat_impedance_coef: 0.055,
    bone_offset: 0.180_168_94,
};

/// Female coefficient table
pub const FEMALE_COEFFICIENTS: BiaCoefficients = BiaCoefficients {
    fat_impedance_coef: 0.025,
    bone_offset: 0.245_691_014,
};

impl BiaCoefficients {
    /// Coefficient table for a sex
    #[must_use]
    pub const fn for_sex(sex: Sex) -> &'static Self {
        match sex {
            Sex::Male => &MALE_COEFFICIENTS,
            Sex::Female => &FEMALE_COEFFICIENTS,
        }
    }
}

/// Validated inputs to the BIA regressions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiaInput {
    /// Weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age_years: f64,
    /// Impedance (ohm)
    pub impedance_ohm: f64,
    /// Sex
    pub sex: Sex,
}

impl BiaInput {
    /// Build inputs from a profile and a measurement
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::PreconditionViolation` if weight, height, age or impedance
    /// is zero, negative or not finite
    pub fn new(weight_kg: f64, impedance_ohm: f64, attributes: &PersonAttributes) -> AppResult<Self> {
        require_positive("weight", weight_kg)?;
        require_positive("height", attributes.height_cm())?;
        require_positive("impedance", impedance_ohm)?;
        if attributes.age_years() == 0 {
            return Err(AppError::precondition("age must be at least 1 year"));
        }

        Ok(Self {
            weight_kg,
            height_cm: attributes.height_cm(),
            age_years: f64::from(attributes.age_years()),
            impedance_ohm,
            sex: attributes.sex(),
        })
    }

    fn coefficients(&self) -> &'static BiaCoefficients {
        BiaCoefficients::for_sex(self.sex)
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::precondition(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

/// Impedance-derived body composition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiaMetrics {
    /// Body fat (% of body weight)
    pub body_fat_pct: f64,
    /// Muscle mass (kg)
    pub muscle_mass_kg: f64,
    /// Body water (% of body weight)
    pub water_pct: f64,
    /// Bone mass (kg)
    pub bone_mass_kg: f64,
}

/// Lean body mass estimate (kg)
#[must_use]
pub fn lean_body_mass(input: &BiaInput) -> f64 {
    use lbm_terms::{AGE_COEF, HEIGHT_COEF, IMPEDANCE_COEF, INTERCEPT, WEIGHT_COEF};

    let height_term = (input.height_cm * HEIGHT_COEF / 100.0) * (input.height_cm / 100.0);
    height_term + input.weight_kg.mul_add(WEIGHT_COEF, INTERCEPT)
        - input.impedance_ohm * IMPEDANCE_COEF
        - input.age_years * AGE_COEF
}

/// Body fat percentage
#[must_use]
pub fn body_fat_pct(input: &BiaInput) -> f64 {
    let lbm = lean_body_mass(input);
    let age_correction = input.impedance_ohm * input.coefficients().fat_impedance_coef / 100.0
        * (FAT_AGE_PIVOT - input.age_years);
    ((lbm - age_correction) / input.weight_kg).mul_add(-FAT_LBM_SCALE, 1.0) * 100.0
}

/// Bone mass (kg)
#[must_use]
pub fn bone_mass_kg(input: &BiaInput) -> f64 {
    let bone = lean_body_mass(input).mul_add(BONE_LBM_COEF, -input.coefficients().bone_offset);
    if bone > BONE_ADJUST_THRESHOLD_KG {
        bone + BONE_ADJUST_KG
    } else {
        bone - BONE_ADJUST_KG
    }
}

/// Muscle mass (kg): weight minus fat mass and bone mass
#[must_use]
pub fn muscle_mass_kg(input: &BiaInput) -> f64 {
    let fat_mass = body_fat_pct(input) / 100.0 * input.weight_kg;
    input.weight_kg - fat_mass - bone_mass_kg(input)
}

/// Body water percentage
#[must_use]
pub fn water_pct(input: &BiaInput) -> f64 {
    let water = (100.0 - body_fat_pct(input)) * WATER_FFM_SHARE;
    let correction = if water > WATER_CORRECTION_PIVOT {
        WATER_CORRECTION_HIGH
    } else {
        WATER_CORRECTION_LOW
    };
    water * correction
}

/// Run every BIA regression for one measurement
#[must_use]
pub fn analyze(input: &BiaInput) -> BiaMetrics {
    BiaMetrics {
        body_fat_pct: body_fat_pct(input),
        muscle_mass_kg: muscle_mass_kg(input),
        water_pct: water_pct(input),
        bone_mass_kg: bone_mass_kg(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use body_metrics_core::errors::ErrorCode;

    fn input(sex: Sex, weight: f64, height: f64, age: u32, impedance: f64) -> BiaInput {
        let attrs = PersonAttributes::new("Test", weight, height, age, sex).unwrap();
        BiaInput::new(weight, impedance, &attrs).unwrap()
    }

    #[test]
    fn test_lean_body_mass_reference_male() {
        // 175 cm, 70 kg, 30 y, 500 ohm
        // 15.8515 * 1.75 + 22.4 + 12.226 - 3.4 - 1.626 = 57.34
        let lbm = lean_body_mass(&input(Sex::Male, 70.0, 175.0, 30, 500.0));
        assert!((lbm - 57.340_1).abs() < 1e-3, "lbm = {lbm}");
    }

    #[test]
    fn test_reference_male_composition() {
        let metrics = analyze(&input(Sex::Male, 70.0, 175.0, 30, 500.0));
        // age 30 cancels the impedance correction: (1 - 57.3401 / 70 * 1.1) * 100
        assert!((metrics.body_fat_pct - 9.894).abs() < 1e-2, "{metrics:?}");
        // 57.3401 * 0.05158 - 0.18016894 = 2.7775, above 2.2 so +0.1
        assert!((metrics.bone_mass_kg - 2.8775).abs() < 1e-3, "{metrics:?}");
        assert!(
            (metrics.muscle_mass_kg - (70.0 - 0.098_94 * 70.0 - 2.8775)).abs() < 1e-2,
            "{metrics:?}"
        );
        // (100 - 9.894) * 0.7 = 63.07 > 50, so x0.98
        assert!((metrics.water_pct - 61.81).abs() < 1e-2, "{metrics:?}");
    }

    #[test]
    fn test_sex_changes_coefficients() {
        let male = analyze(&input(Sex::Male, 65.0, 168.0, 45, 520.0));
        let female = analyze(&input(Sex::Female, 65.0, 168.0, 45, 520.0));
        assert!((male.body_fat_pct - female.body_fat_pct).abs() > 0.1);
        assert!((male.bone_mass_kg - female.bone_mass_kg).abs() > 0.01);
    }

    #[test]
    fn test_higher_impedance_means_more_fat() {
        let low = body_fat_pct(&input(Sex::Female, 62.0, 165.0, 35, 420.0));
        let high = body_fat_pct(&input(Sex::Female, 62.0, 165.0, 35, 620.0));
        assert!(high > low);
    }

    #[test]
    fn test_impossible_inputs_are_not_clamped() {
        // Very tall, very light, young person with low impedance: the regression
        // predicts more lean mass than body weight, so fat goes negative.
        let fat = body_fat_pct(&input(Sex::Female, 40.0, 190.0, 20, 200.0));
        assert!(fat < 0.0, "fat = {fat}");
    }

    #[test]
    fn test_deterministic() {
        let a = analyze(&input(Sex::Male, 81.3, 182.0, 52, 471.0));
        let b = analyze(&input(Sex::Male, 81.3, 182.0, 52, 471.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_impedance_is_precondition_violation() {
        let attrs = PersonAttributes::new("Test", 70.0, 175.0, 30, Sex::Male).unwrap();
        let err = BiaInput::new(70.0, 0.0, &attrs).unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionViolation);
    }
}
