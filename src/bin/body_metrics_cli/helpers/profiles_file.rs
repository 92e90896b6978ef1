// ABOUTME: Loads and saves the profile store snapshot as a JSON file
// ABOUTME: Missing files are an empty store; saves go through a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use body_metrics::errors::{AppError, AppResult};
use body_metrics::models::ProfileId;
use body_metrics::store::ProfileStore;
use tracing::debug;

/// Load the store, or an empty one if the file does not exist yet
pub fn load(path: &Path) -> AppResult<ProfileStore> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let store: ProfileStore = serde_json::from_str(&contents)?;
            debug!(path = %path.display(), profiles = store.len(), "Loaded profiles file");
            Ok(store)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ProfileStore::new()),
        Err(e) => Err(AppError::from(e)
            .with_details(serde_json::json!({ "path": path.display().to_string() }))),
    }
}

/// Write the store atomically
pub fn save(path: &Path, store: &ProfileStore) -> AppResult<()> {
    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), profiles = store.len(), "Saved profiles file");
    Ok(())
}

/// Resolve a profile argument given as an id or a name
pub fn resolve(store: &ProfileStore, reference: &str) -> AppResult<ProfileId> {
    let by_id = reference
        .trim()
        .parse::<u32>()
        .ok()
        .map(ProfileId::new)
        .filter(|id| store.get(*id).is_some());

    by_id
        .or_else(|| store.find_by_name(reference).map(|profile| profile.id))
        .ok_or_else(|| AppError::not_found(format!("Profile '{reference}'")))
}
