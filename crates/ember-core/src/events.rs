//! Reward events emitted at the engine boundary.
//!
//! Every point grant produces a [`RewardEvent`]. The embedding layer
//! consumes these for celebratory feedback; the core only emits them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why points were granted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RewardReason {
    /// An activity in the daily selection was completed
    TaskComplete,
    /// A quest's completion condition was met
    QuestComplete,
    /// The streak reached a milestone tier
    StreakMilestone,
}

/// A single point grant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardEvent {
    /// Points granted
    pub points: u32,
    /// Why they were granted
    pub reason: RewardReason,
    /// When the grant happened
    pub at: DateTime<Utc>,
}

impl RewardEvent {
    /// Build an event stamped with the current time.
    pub fn now(points: u32, reason: RewardReason) -> Self {
        Self {
            points,
            reason,
            at: Utc::now(),
        }
    }
}
