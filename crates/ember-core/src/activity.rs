//! Activity types for daily engagement tracking.
//!
//! An [`Activity`] is a single completable unit of work offered for a day.
//! The candidate pool (all activities eligible for a category) is sourced
//! externally from a catalog; the core treats it as an opaque slice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact level of an activity.
///
/// Impact is the quota dimension for daily selection: a selection asks for
/// a fixed number of activities per impact bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// High-leverage work (e.g., outreach, shipping)
    High,
    /// Steady progress work (default)
    Medium,
    /// Low-effort upkeep work
    Low,
}

impl Default for Impact {
    fn default() -> Self {
        Impact::Medium
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::High => write!(f, "high"),
            Impact::Medium => write!(f, "medium"),
            Impact::Low => write!(f, "low"),
        }
    }
}

/// A unit of work offered to the user for a given day.
///
/// Activities are created fresh each calendar day by the selector (or
/// restored from persisted state if today's set already exists), mutated
/// in place when completed, and replaced at the next day boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Stable identifier, unique within the candidate pool for a category
    pub id: String,
    /// Human-readable description; also the dedup key for selection
    pub title: String,
    /// Point reward on completion
    pub points: u32,
    /// Impact bucket used for quota-based selection
    pub impact: Impact,
    /// Classification tag used for content lookup (e.g. "research")
    pub category: String,
    /// Whether the activity has been completed today
    #[serde(default)]
    pub completed: bool,
}

impl Activity {
    /// Create a new, not-yet-completed activity.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        points: u32,
        impact: Impact,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            points,
            impact,
            category: category.into(),
            completed: false,
        }
    }
}
