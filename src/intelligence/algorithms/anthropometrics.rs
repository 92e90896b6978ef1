// ABOUTME: Weight and height based indices: BMI, basal metabolic rate, ideal weight, visceral fat
// ABOUTME: Implements Quetelet BMI, Mifflin-St Jeor BMR, Devine ideal weight with sex-specific constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Anthropometric indices
//!
//! These need no impedance and are available for every matched reading,
//! except the visceral fat rating which scales only report alongside a BIA
//! measurement.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Devine, B.J. (1974). Gentamicin therapy. *Drug Intell Clin Pharm*, 8, 650-655.

use body_metrics_core::errors::AppResult;
use body_metrics_core::models::Sex;

use super::bia::require_positive;

/// Centimetres per inch
const CM_PER_INCH: f64 = 2.54;

/// Mifflin-St Jeor coefficients
mod mifflin {
    pub const WEIGHT_COEF: f64 = 10.0;
    pub const HEIGHT_COEF: f64 = 6.25;
    pub const AGE_COEF: f64 = 5.0;
    pub const MALE_CONSTANT: f64 = 5.0;
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Devine ideal weight coefficients
mod devine {
    pub const MALE_BASE_KG: f64 = 50.0;
    pub const FEMALE_BASE_KG: f64 = 45.5;
    pub const KG_PER_INCH: f64 = 2.3;
    pub const BASE_HEIGHT_INCHES: f64 = 60.0;
}

/// Visceral fat rating coefficients
mod visceral {
    pub const WEIGHT_COEF: f64 = 0.74;
    pub const HEIGHT_COEF: f64 = 0.082;
    pub const INTERCEPT: f64 = 13.95;
    pub const MALE_SCALE: f64 = 0.55;
    pub const FEMALE_SCALE: f64 = 0.44;
    pub const AGE_PIVOT: f64 = 30.0;
    pub const MALE_AGE_COEF: f64 = 0.1;
    pub const FEMALE_AGE_COEF: f64 = 0.07;
}

/// Body Mass Index: weight / height_m^2
///
/// # Errors
///
/// Returns `ErrorCode::PreconditionViolation` if weight or height is not positive
///
/// # Example
///
/// ```rust
/// use body_metrics::intelligence::algorithms::anthropometrics::bmi;
///
/// let value = bmi(70.0, 175.0).unwrap();
/// assert!((value - 22.857).abs() < 1e-3);
/// ```
pub fn bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    require_positive("weight", weight_kg)?;
    require_positive("height", height_cm)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Basal Metabolic Rate (kcal/day) using Mifflin-St Jeor
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + offset,
/// offset +5 for men and -161 for women.
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    use mifflin::{AGE_COEF, FEMALE_CONSTANT, HEIGHT_COEF, MALE_CONSTANT, WEIGHT_COEF};

    let constant = match sex {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    };
    WEIGHT_COEF.mul_add(weight_kg, HEIGHT_COEF * height_cm) - AGE_COEF * f64::from(age_years)
        + constant
}

/// Ideal body weight (kg) using the Devine formula
///
/// 50.0 kg (men) or 45.5 kg (women) plus 2.3 kg per inch above five feet.
#[must_use]
pub fn ideal_weight_kg(height_cm: f64, sex: Sex) -> f64 {
    use devine::{BASE_HEIGHT_INCHES, FEMALE_BASE_KG, KG_PER_INCH, MALE_BASE_KG};

    let base = match sex {
        Sex::Male => MALE_BASE_KG,
        Sex::Female => FEMALE_BASE_KG,
    };
    KG_PER_INCH.mul_add(height_cm / CM_PER_INCH - BASE_HEIGHT_INCHES, base)
}

/// Visceral fat rating (dimensionless, typical scale 1-59)
#[must_use]
pub fn visceral_fat_rating(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    use visceral::{
        AGE_PIVOT, FEMALE_AGE_COEF, FEMALE_SCALE, HEIGHT_COEF, INTERCEPT, MALE_AGE_COEF,
        MALE_SCALE, WEIGHT_COEF,
    };

    let (scale, age_coef) = match sex {
        Sex::Male => (MALE_SCALE, MALE_AGE_COEF),
        Sex::Female => (FEMALE_SCALE, FEMALE_AGE_COEF),
    };
    let base = WEIGHT_COEF.mul_add(weight_kg, -HEIGHT_COEF * height_cm) + INTERCEPT;
    let age = f64::from(age_years);
    let age_term = if age > AGE_PIVOT {
        (age - AGE_PIVOT) * age_coef
    } else {
        0.0
    };
    base.mul_add(scale, age_term)
}
