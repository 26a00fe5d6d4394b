//! Engine state persistence.
//!
//! State is a single JSON document read once at session start and written
//! back after each mutating operation. Loading never fails: a missing or
//! corrupt file is treated as a new user and yields the default state
//! (the engine is a best-effort tracker; data loss degrades to a streak
//! of zero, it does not crash).

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::EngineState;
use crate::error::StoreError;

const STATE_FILE: &str = "state.json";

/// JSON-file-backed store for [`EngineState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at the default data directory.
    pub fn open() -> Self {
        Self::at(super::data_dir().join(STATE_FILE))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state.
    ///
    /// Missing file, unreadable file, and invalid JSON all load as the
    /// default (new-user) state.
    pub fn load(&self) -> EngineState {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return EngineState::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Write the state back, creating parent directories as needed.
    pub fn save(&self, state: &EngineState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
