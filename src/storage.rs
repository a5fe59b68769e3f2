//! Profile persistence.
//!
//! The whole profile (achievements, lifetime stats, theme) lives under
//! a single key as one JSON blob. The backing store is a trait so hosts
//! can plug in whatever key-value storage they have; [`MemoryStore`]
//! backs tests.
//!
//! Loading never fails: a missing or corrupt blob falls back to the
//! default profile with a warning, so a bad write can never brick the
//! app.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::{AchievementBook, PlayStats};

/// The key the profile blob is stored under.
pub const PROFILE_KEY: &str = "brindis.profile";

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend: {0}")]
    Backend(String),
    #[error("profile serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key-value store the profile persists into.
pub trait ProfileStore {
    /// Read the value under `key`, if present.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: rustc_hash::FxHashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Visual theme preference.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Fiesta,
    Oscuro,
    Neon,
}

/// Everything persisted across sessions.
///
/// Every field defaults, so a blob written by an older version still
/// deserializes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub achievements: AchievementBook,
    #[serde(default)]
    pub lifetime: PlayStats,
    #[serde(default)]
    pub theme: Theme,
}

/// Load the profile, falling back to the default on any problem.
#[must_use]
pub fn load_profile(store: &dyn ProfileStore) -> Profile {
    let Some(blob) = store.read(PROFILE_KEY) else {
        return Profile::default();
    };
    match serde_json::from_str(&blob) {
        Ok(profile) => profile,
        Err(err) => {
            warn!("corrupt profile blob, starting fresh: {}", err);
            Profile::default()
        }
    }
}

/// Serialize and write the profile.
pub fn save_profile(store: &mut dyn ProfileStore, profile: &Profile) -> Result<(), StorageError> {
    let blob = serde_json::to_string(profile)?;
    store.write(PROFILE_KEY, &blob)
}
