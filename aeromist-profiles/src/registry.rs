//! Profile Registry
//!
//! Thread-safe name → profile map. The global instance comes preloaded with
//! the embedded defaults; applications can register their own scenarios
//! alongside them.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::{default_profiles, Profile, ProfileError};

/// Thread-safe profile registry
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Register a profile under its own name.
    ///
    /// The profile is checked against the hard envelope first, and a name
    /// can only be registered once.
    pub fn register(&self, profile: Profile) -> Result<(), ProfileError> {
        profile.check()?;

        // Entries are plain data, a poisoned lock leaves nothing half-written
        let mut profiles = self.profiles.write().unwrap_or_else(PoisonError::into_inner);
        if profiles.contains_key(&profile.name) {
            return Err(ProfileError::Duplicate(profile.name));
        }
        profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Get a copy of the profile registered under `name`
    pub fn get(&self, name: &str) -> Result<Profile, ProfileError> {
        let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
        profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Whether a profile is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
        profiles.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<_> = profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Register the embedded default profiles
    pub fn load_defaults(&self) -> Result<(), ProfileError> {
        for profile in default_profiles()? {
            self.register(profile)?;
        }
        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the embedded defaults; a load failure is logged, not fatal
fn preloaded() -> ProfileRegistry {
    let registry = ProfileRegistry::new();
    if let Err(e) = registry.load_defaults() {
        log::error!("Failed to load embedded profiles: {}", e);
    }
    registry
}

lazy_static::lazy_static! {
    /// Global profile registry with the embedded defaults loaded
    pub static ref GLOBAL_REGISTRY: ProfileRegistry = preloaded();
}
