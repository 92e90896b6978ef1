// ABOUTME: Body composition algorithms: EMA smoothing, BIA regressions, anthropometric indices
// ABOUTME: Pure functions with no state; the reading pipeline owns all per-person state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weight and height based indices (BMI, BMR, ideal weight, visceral fat)
pub mod anthropometrics;
/// Bioelectrical impedance analysis regressions
pub mod bia;
/// Exponential moving average smoothing
pub mod ema;

pub use anthropometrics::{basal_metabolic_rate, bmi, ideal_weight_kg, visceral_fat_rating};
pub use bia::{BiaCoefficients, BiaInput, BiaMetrics};
pub use ema::smooth;
