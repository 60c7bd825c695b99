//! Profile persistence.
//!
//! The controller only knows the [`ProfileStore`] trait. The desktop app
//! keeps the profile as JSON in the user's data directory; tests and
//! `--ephemeral` runs use [`MemoryProfileStore`].

use crate::error::StoreError;
use crate::preferences::UserProfile;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const APP_DIR: &str = "comete";
const PROFILE_FILE: &str = "profile.json";

/// External storage for the user profile.
pub trait ProfileStore {
    /// Returns the stored profile, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<UserProfile>, StoreError>;

    fn save(&mut self, profile: &UserProfile) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    slot: Arc<Mutex<Option<UserProfile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(profile))),
        }
    }

    /// The last saved profile.
    pub fn saved(&self) -> Option<UserProfile> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.saved())
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(profile.clone());
        Ok(())
    }
}

/// Stores the profile as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in `dir` (for `--data-dir`), using the standard file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PROFILE_FILE))
    }

    /// Store in the platform data directory, e.g. `~/.local/share/comete/profile.json`.
    pub fn in_default_location() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::in_dir(base.join(APP_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), StoreError> {
        write_json(&self.path, profile)
    }
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("comete-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let store = JsonFileProfileStore::in_dir(scratch_dir("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = scratch_dir("round-trip");
        let mut store = JsonFileProfileStore::in_dir(&dir);
        let profile = UserProfile {
            name: "Ada".to_string(),
            language: Language::En,
            ..UserProfile::default()
        };

        store.save(&profile).unwrap();
        assert!(store.path().ends_with("profile.json"));
        assert_eq!(store.load().unwrap(), Some(profile));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_is_a_json_error() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("profile.json"), "{ not json").unwrap();

        let store = JsonFileProfileStore::in_dir(&dir);
        assert!(matches!(store.load(), Err(StoreError::Json { .. })));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryProfileStore::new();
        let mut writer = store.clone();
        writer.save(&UserProfile::default()).unwrap();
        assert_eq!(store.load().unwrap(), Some(UserProfile::default()));
    }
}
