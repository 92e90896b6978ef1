// ABOUTME: Profile store holding enrolled household members and their smoothing state
// ABOUTME: Indexed by profile id in registration order with a serializable snapshot for hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Store
//!
//! Owns every [`PersonProfile`] keyed by [`ProfileId`]. Iteration is in id order,
//! which is registration order. Smoothing state lives inside each entry and is
//! dropped together with it on removal.

use std::collections::{btree_map, BTreeMap, BTreeSet};

use body_metrics_core::errors::{AppError, AppResult, ErrorCode};
use body_metrics_core::models::{PersonAttributes, PersonProfile, ProfileId, SmoothingState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::AppLogger;

/// Persisted form of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreSnapshot {
    next_id: Option<ProfileId>,
    profiles: Vec<PersonProfile>,
}

/// Enrolled profiles and their smoothing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoreSnapshot", into = "StoreSnapshot")]
pub struct ProfileStore {
    profiles: BTreeMap<ProfileId, PersonProfile>,
    /// `None` once every id has been handed out
    next_id: Option<ProfileId>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create an empty store; the first enrolled profile gets id 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
            next_id: Some(ProfileId::new(1)),
        }
    }

    /// Enroll a new profile with empty smoothing state
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceAlreadyExists` if a profile with the same name
    /// (case-insensitive) is already enrolled, or `ErrorCode::ValueOutOfRange`
    /// once the id space is exhausted
    pub fn enroll(&mut self, attributes: PersonAttributes) -> AppResult<ProfileId> {
        if self.find_by_name(attributes.name()).is_some() {
            return Err(AppError::already_exists(format!(
                "Profile '{}'",
                attributes.name()
            )));
        }

        let id = self.next_id.ok_or_else(|| {
            AppError::new(ErrorCode::ValueOutOfRange, "No profile ids left to assign")
        })?;
        let btree_map::Entry::Vacant(slot) = self.profiles.entry(id) else {
            return Err(AppError::already_exists(format!("Profile id {id}")));
        };
        slot.insert(PersonProfile::new(id, attributes));
        self.next_id = id.next();
        AppLogger::log_profile_event(id, "enrolled");
        Ok(id)
    }

    /// Look up a profile
    #[must_use]
    pub fn get(&self, id: ProfileId) -> Option<&PersonProfile> {
        self.profiles.get(&id)
    }

    /// Look up a profile by display name, ignoring surrounding whitespace and
    /// letter case (Unicode lowercase, so "Émile" and "émile" are the same name)
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&PersonProfile> {
        let name = fold_name(name);
        self.profiles
            .values()
            .find(|profile| fold_name(profile.name()) == name)
    }

    /// Profiles in registration order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PersonProfile> {
        self.profiles.values()
    }

    /// Number of enrolled profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is enrolled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Replace a profile's static attributes, keeping its smoothing state
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the profile does not exist, or
    /// `ErrorCode::ResourceAlreadyExists` if the new name belongs to another profile
    pub fn update_attributes(
        &mut self,
        id: ProfileId,
        attributes: PersonAttributes,
    ) -> AppResult<()> {
        if let Some(other) = self.find_by_name(attributes.name()) {
            if other.id != id {
                return Err(AppError::already_exists(format!(
                    "Profile '{}'",
                    attributes.name()
                )));
            }
        }
        let profile = self.get_mut(id)?;
        profile.attributes = attributes;
        AppLogger::log_profile_event(id, "updated");
        Ok(())
    }

    /// Remove a profile together with its smoothing state
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the profile does not exist
    pub fn remove(&mut self, id: ProfileId) -> AppResult<PersonProfile> {
        let profile = self
            .profiles
            .remove(&id)
            .ok_or_else(|| profile_not_found(id))?;
        AppLogger::log_profile_event(id, "removed");
        Ok(profile)
    }

    /// Forget a profile's smoothing history
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the profile does not exist
    pub fn reset_smoothing(&mut self, id: ProfileId) -> AppResult<()> {
        self.get_mut(id)?.smoothing = SmoothingState::default();
        AppLogger::log_profile_event(id, "smoothing_reset");
        Ok(())
    }

    /// Restore smoothing state persisted by the host, e.g. through a write-back sink
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the profile does not exist
    pub fn restore_smoothing(&mut self, id: ProfileId, state: SmoothingState) -> AppResult<()> {
        self.get_mut(id)?.smoothing = state;
        AppLogger::log_profile_event(id, "smoothing_restored");
        Ok(())
    }

    pub(crate) fn commit_smoothing(&mut self, id: ProfileId, state: SmoothingState) -> AppResult<()> {
        self.get_mut(id)?.smoothing = state;
        debug!(
            profile.id = %id,
            smoothing.weight_kg = ?state.weight_kg,
            smoothing.impedance_ohm = ?state.impedance_ohm,
            "Committed smoothing state"
        );
        Ok(())
    }

    fn get_mut(&mut self, id: ProfileId) -> AppResult<&mut PersonProfile> {
        self.profiles
            .get_mut(&id)
            .ok_or_else(|| profile_not_found(id))
    }
}

fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn profile_not_found(id: ProfileId) -> AppError {
    AppError::not_found(format!("Profile {id}")).with_profile_id(id)
}

impl From<ProfileStore> for StoreSnapshot {
    fn from(store: ProfileStore) -> Self {
        Self {
            next_id: store.next_id,
            profiles: store.profiles.into_values().collect(),
        }
    }
}

impl TryFrom<StoreSnapshot> for ProfileStore {
    type Error = AppError;

    fn try_from(snapshot: StoreSnapshot) -> AppResult<Self> {
        let mut profiles = BTreeMap::new();
        let mut names = BTreeSet::new();
        for profile in snapshot.profiles {
            let id = profile.id;
            if !names.insert(fold_name(profile.name())) {
                return Err(AppError::invalid_input(format!(
                    "duplicate profile name '{}' in snapshot",
                    profile.name()
                )));
            }
            if profiles.insert(id, profile).is_some() {
                return Err(AppError::invalid_input(format!(
                    "duplicate profile id {id} in snapshot"
                )));
            }
        }

        // Never hand out an id at or below one already taken.
        let next_id = match profiles.keys().next_back() {
            None => snapshot.next_id,
            Some(&last) => last
                .next()
                .zip(snapshot.next_id)
                .map(|(after_last, stored)| stored.max(after_last)),
        };

        Ok(Self { profiles, next_id })
    }
}

impl<'a> IntoIterator for &'a ProfileStore {
    type Item = &'a PersonProfile;
    type IntoIter = btree_map::Values<'a, ProfileId, PersonProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use body_metrics_core::models::Sex;

    fn attrs(name: &str, weight: f64) -> PersonAttributes {
        PersonAttributes::new(name, weight, 170.0, 30, Sex::Female).unwrap()
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut store = ProfileStore::new();
        let a = store.enroll(attrs("A", 60.0)).unwrap();
        let b = store.enroll(attrs("B", 80.0)).unwrap();
        assert!(a < b);
        let names: Vec<&str> = store.iter().map(PersonProfile::name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut store = ProfileStore::new();
        let a = store.enroll(attrs("A", 60.0)).unwrap();
        store.remove(a).unwrap();
        let b = store.enroll(attrs("B", 80.0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut store = ProfileStore::new();
        store.enroll(attrs("Alice", 60.0)).unwrap();
        let err = store.enroll(attrs("alice", 61.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let mut store = ProfileStore::new();
        let err = store.reset_smoothing(ProfileId::new(9)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.context.profile_id, Some(ProfileId::new(9)));
    }

    #[test]
    fn test_snapshot_repairs_next_id() {
        let json = r#"{"next_id":1,"profiles":[
            {"id":4,"name":"A","expected_weight_kg":60.0,"height_cm":170.0,"age_years":30,"sex":"female"}
        ]}"#;
        let mut store: ProfileStore = serde_json::from_str(json).unwrap();
        let id = store.enroll(attrs("B", 80.0)).unwrap();
        assert_eq!(id, ProfileId::new(5));
    }

    #[test]
    fn test_enroll_fails_once_ids_are_exhausted() {
        let json = r#"{"next_id":1,"profiles":[
            {"id":4294967295,"name":"Max","expected_weight_kg":90.0,"height_cm":185.0,"age_years":40,"sex":"male"}
        ]}"#;
        let mut store: ProfileStore = serde_json::from_str(json).unwrap();

        let err = store.enroll(attrs("Newcomer", 70.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ProfileId::new(u32::MAX)).unwrap().name(), "Max");

        // Removing the last profile does not free its id for reuse
        store.remove(ProfileId::new(u32::MAX)).unwrap();
        assert!(store.enroll(attrs("Newcomer", 70.0)).is_err());
    }

    #[test]
    fn test_enroll_refuses_occupied_id() {
        let json = r#"{"next_id":null,"profiles":[]}"#;
        let mut store: ProfileStore = serde_json::from_str(json).unwrap();
        assert!(store.enroll(attrs("A", 60.0)).is_err());

        let mut store = ProfileStore::new();
        let a = store.enroll(attrs("A", 60.0)).unwrap();
        store.next_id = Some(a);
        let err = store.enroll(attrs("B", 80.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
        assert_eq!(store.get(a).unwrap().name(), "A");
    }

    #[test]
    fn test_duplicate_names_fold_unicode_case() {
        let mut store = ProfileStore::new();
        store.enroll(attrs("Émile", 60.0)).unwrap();
        let err = store.enroll(attrs("émile", 61.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
        assert!(store.find_by_name(" ÉMILE ").is_some());
    }

    #[test]
    fn test_snapshot_rejects_names_differing_only_by_case() {
        let json = r#"{"next_id":3,"profiles":[
            {"id":1,"name":"Alice","expected_weight_kg":60.0,"height_cm":165.0,"age_years":30,"sex":"female"},
            {"id":2,"name":"alice","expected_weight_kg":62.0,"height_cm":166.0,"age_years":31,"sex":"female"}
        ]}"#;
        assert!(serde_json::from_str::<ProfileStore>(json).is_err());
    }

    #[test]
    fn test_snapshot_rejects_duplicate_ids() {
        let json = r#"{"next_id":3,"profiles":[
            {"id":1,"name":"A","expected_weight_kg":60.0,"height_cm":170.0,"age_years":30,"sex":"female"},
            {"id":1,"name":"B","expected_weight_kg":80.0,"height_cm":180.0,"age_years":40,"sex":"male"}
        ]}"#;
        assert!(serde_json::from_str::<ProfileStore>(json).is_err());
    }
}
