// ABOUTME: Enrolled household member profile with static attributes and smoothing state
// ABOUTME: Validates anthropometric invariants at construction and on deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Stable identifier of an enrolled profile
///
/// Identifiers are handed out in registration order, so comparing two ids
/// tells which profile was enrolled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(u32);

impl ProfileId {
    /// Wrap a raw identifier
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Identifier following this one, or `None` once the id space is used up
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Biological sex used to select formula coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficient set
    Male,
    /// Female coefficient set
    Female,
}

impl Sex {
    /// Lowercase name used in configuration files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Exponentially smoothed values carried between readings
///
/// `None` means the quantity has never been observed for this profile; the
/// first observation seeds it verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothingState {
    /// Last smoothed weight (kg)
    pub weight_kg: Option<f64>,
    /// Last smoothed impedance (ohm)
    pub impedance_ohm: Option<f64>,
}

impl SmoothingState {
    /// Whether at least one weight has been smoothed
    #[must_use]
    pub const fn weight_initialized(&self) -> bool {
        self.weight_kg.is_some()
    }

    /// Whether at least one impedance has been smoothed
    #[must_use]
    pub const fn impedance_initialized(&self) -> bool {
        self.impedance_ohm.is_some()
    }
}

/// Static attributes of a household member
///
/// Construct through [`PersonAttributes::new`] so the positivity invariants hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPersonAttributes")]
pub struct PersonAttributes {
    name: String,
    expected_weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight_tolerance_kg: Option<f64>,
}

#[derive(Deserialize)]
struct RawPersonAttributes {
    name: String,
    expected_weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    #[serde(default)]
    weight_tolerance_kg: Option<f64>,
}

impl TryFrom<RawPersonAttributes> for PersonAttributes {
    type Error = AppError;

    fn try_from(raw: RawPersonAttributes) -> Result<Self, Self::Error> {
        let attributes = Self::new(
            raw.name,
            raw.expected_weight_kg,
            raw.height_cm,
            raw.age_years,
            raw.sex,
        )?;
        match raw.weight_tolerance_kg {
            Some(tolerance) => attributes.with_weight_tolerance(tolerance),
            None => Ok(attributes),
        }
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a positive number, got {value}"),
        ))
    }
}

impl PersonAttributes {
    /// Create validated attributes
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if expected weight, height or age is not positive,
    /// and `ErrorCode::MissingRequiredField` if the name is blank
    pub fn new(
        name: impl Into<String>,
        expected_weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Profile name must not be empty",
            ));
        }
        require_positive("expected_weight_kg", expected_weight_kg)?;
        require_positive("height_cm", height_cm)?;
        if age_years == 0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "age_years must be at least 1",
            ));
        }

        Ok(Self {
            name,
            expected_weight_kg,
            height_cm,
            age_years,
            sex,
            weight_tolerance_kg: None,
        })
    }

    /// Override the matcher's weight tolerance for this person
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the tolerance is not positive
    pub fn with_weight_tolerance(mut self, tolerance_kg: f64) -> AppResult<Self> {
        require_positive("weight_tolerance_kg", tolerance_kg)?;
        self.weight_tolerance_kg = Some(tolerance_kg);
        Ok(self)
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight the person usually weighs (kg)
    #[must_use]
    pub const fn expected_weight_kg(&self) -> f64 {
        self.expected_weight_kg
    }

    /// Height (cm)
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Age (years)
    #[must_use]
    pub const fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Biological sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Per-person weight tolerance override (kg)
    #[must_use]
    pub const fn weight_tolerance_kg(&self) -> Option<f64> {
        self.weight_tolerance_kg
    }
}

/// An enrolled household member together with their smoothing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Stable identifier
    pub id: ProfileId,
    /// Static attributes
    #[serde(flatten)]
    pub attributes: PersonAttributes,
    /// Running smoothing state, mutated only after a matched reading
    #[serde(default)]
    pub smoothing: SmoothingState,
}

impl PersonProfile {
    /// Create a profile with empty smoothing state
    #[must_use]
    pub fn new(id: ProfileId, attributes: PersonAttributes) -> Self {
        Self {
            id,
            attributes,
            smoothing: SmoothingState::default(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        self.attributes.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_reject_non_positive_values() {
        assert!(PersonAttributes::new("Alice", 0.0, 165.0, 30, Sex::Female).is_err());
        assert!(PersonAttributes::new("Alice", 60.0, -1.0, 30, Sex::Female).is_err());
        assert!(PersonAttributes::new("Alice", 60.0, 165.0, 0, Sex::Female).is_err());
        assert!(PersonAttributes::new("Alice", f64::NAN, 165.0, 30, Sex::Female).is_err());
        assert!(PersonAttributes::new("  ", 60.0, 165.0, 30, Sex::Female).is_err());
    }

    #[test]
    fn test_weight_tolerance_must_be_positive() {
        let attrs = PersonAttributes::new("Bob", 85.0, 180.0, 40, Sex::Male).unwrap();
        assert!(attrs.clone().with_weight_tolerance(0.0).is_err());
        let attrs = attrs.with_weight_tolerance(3.0).unwrap();
        assert_eq!(attrs.weight_tolerance_kg(), Some(3.0));
    }

    #[test]
    fn test_profile_id_next_stops_at_max() {
        assert_eq!(ProfileId::new(7).next(), Some(ProfileId::new(8)));
        assert_eq!(ProfileId::new(u32::MAX).next(), None);
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_deserialization_validates_attributes() {
        let json = r#"{"id":1,"name":"Alice","expected_weight_kg":60.0,"height_cm":0.0,"age_years":30,"sex":"female"}"#;
        assert!(serde_json::from_str::<PersonProfile>(json).is_err());

        let json = r#"{"id":1,"name":"Alice","expected_weight_kg":60.0,"height_cm":165.0,"age_years":30,"sex":"female"}"#;
        let profile: PersonProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, ProfileId::new(1));
        assert_eq!(profile.smoothing, SmoothingState::default());
    }
}
