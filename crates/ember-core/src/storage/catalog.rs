//! Activity catalog input.
//!
//! The candidate pool is authored externally as a JSON file: a flat list
//! of catalog entries with impact already assigned. The core does not
//! define how the catalog is authored; it only loads it and narrows it to
//! a per-category pool for the selector.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::activity::{Activity, Impact};
use crate::error::StoreError;

/// One authored catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub points: u32,
    pub impact: Impact,
    pub category: String,
}

impl From<CatalogEntry> for Activity {
    fn from(entry: CatalogEntry) -> Self {
        Activity::new(entry.id, entry.title, entry.points, entry.impact, entry.category)
    }
}

/// An authored set of candidate activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::CatalogReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::CatalogParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The full candidate pool, all categories.
    pub fn pool(&self) -> Vec<Activity> {
        self.entries.iter().cloned().map(Activity::from).collect()
    }

    /// The candidate pool narrowed to one category.
    pub fn pool_for_category(&self, category: &str) -> Vec<Activity> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .map(Activity::from)
            .collect()
    }
}
