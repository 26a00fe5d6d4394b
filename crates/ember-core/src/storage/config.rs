//! TOML-based application configuration.
//!
//! Stores tunables for the engagement engine:
//! - Per-impact selection quotas
//! - Momentum policy (threshold and multiplier)
//! - Streak milestone schedule
//! - Review-queue weights
//!
//! Configuration is stored at `<data dir>/config.toml`. Every field has a
//! serde-level default, so a missing file or a partial file both work.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::review::ReviewWeights;
use crate::selector::QuotaSet;
use crate::streak::{MilestoneSchedule, MomentumPolicy};

const CONFIG_FILE: &str = "config.toml";

/// Per-impact selection quota configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionConfig {
    #[serde(default = "default_high_quota")]
    pub high: usize,
    #[serde(default = "default_medium_quota")]
    pub medium: usize,
    #[serde(default = "default_low_quota")]
    pub low: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            high: default_high_quota(),
            medium: default_medium_quota(),
            low: default_low_quota(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Daily selection quotas
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Momentum point scaling
    #[serde(default)]
    pub momentum: MomentumPolicy,
    /// Streak milestone bonuses
    #[serde(default)]
    pub milestones: MilestoneSchedule,
    /// Review-queue scoring weights
    #[serde(default)]
    pub review: ReviewWeights,
}

impl Config {
    /// Default configuration file path.
    pub fn default_path() -> PathBuf {
        super::data_dir().join(CONFIG_FILE)
    }

    /// Load configuration from a path.
    ///
    /// A missing file yields the defaults; an unparseable file is an
    /// error (a config the user wrote but got wrong should not be
    /// silently ignored).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
        };
        toml::from_str(&raw).map_err(|err| ConfigError::ParseFailed(err.to_string()))
    }

    /// Load from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path())
    }

    /// Selection quotas as a [`QuotaSet`].
    pub fn quotas(&self) -> QuotaSet {
        QuotaSet {
            high: self.selection.high,
            medium: self.selection.medium,
            low: self.selection.low,
        }
    }
}

fn default_high_quota() -> usize {
    2
}

fn default_medium_quota() -> usize {
    1
}

fn default_low_quota() -> usize {
    1
}
