//! Shared helpers for CLI commands.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use ember_core::{Config, EngagementEngine, StateStore};

/// Resolved paths shared by all commands.
pub struct Context {
    state_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(state_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self {
            state_path,
            config_path,
        }
    }

    /// The state store, honoring the `--state` override.
    pub fn store(&self) -> StateStore {
        match &self.state_path {
            Some(path) => StateStore::at(path),
            None => StateStore::open(),
        }
    }

    /// Load configuration, honoring the `--config` override.
    pub fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };
        Ok(config)
    }

    /// Build an engine from persisted state and configuration.
    pub fn engine(&self) -> Result<EngagementEngine, Box<dyn std::error::Error>> {
        let state = self.store().load();
        Ok(EngagementEngine::from_config(state, &self.config()?))
    }
}

/// Resolve an optional `--date` argument, defaulting to the local calendar
/// day.
pub fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
