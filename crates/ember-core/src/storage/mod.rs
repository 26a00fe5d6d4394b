//! Persistence and configuration.
//!
//! - Engine state: single JSON document (see [`state::StateStore`])
//! - Configuration: TOML file with serde-level defaults (see
//!   [`config::Config`])
//! - Activity catalog: external JSON input (see [`catalog::Catalog`])
//!
//! Files live under `~/.local/share/ember` (platform equivalent) unless a
//! path override is supplied, which tests do.

pub mod catalog;
pub mod config;
pub mod state;

pub use catalog::Catalog;
pub use config::Config;
pub use state::StateStore;

use std::path::PathBuf;

/// Application data directory.
///
/// Falls back to the current directory when the platform has no
/// conventional data directory.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ember")
}
