//! Review-queue prioritization.
//!
//! Surfaces weak, overdue, and never-attempted activities first. The queue
//! is a derived, read-only projection over the activity set plus per-id
//! performance signals; recomputing it with unchanged inputs yields the
//! same ordering.
//!
//! Scoring factors:
//! - Novelty: never-attempted items score highest
//! - Weakness: low success rate pushes an item up
//! - Staleness: days since last completion, saturating at a horizon

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::activity::Activity;

/// Per-activity performance signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSignal {
    /// Last day this activity was completed
    pub last_completed: Option<NaiveDate>,
    /// Times this activity has been offered and acted on
    pub attempts: u32,
    /// Times it was completed
    pub successes: u32,
}

impl ReviewSignal {
    /// Success rate in `[0, 1]`; no attempts counts as 0.
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.attempts)
        }
    }
}

/// Weights for the review scoring factors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReviewWeights {
    /// Weight for never-attempted items (default 0.4)
    pub novelty: f64,
    /// Weight for low success rate (default 0.35)
    pub weakness: f64,
    /// Weight for time since last completion (default 0.25)
    pub staleness: f64,
    /// Days after which staleness saturates (default 30)
    pub staleness_horizon_days: u32,
}

impl Default for ReviewWeights {
    fn default() -> Self {
        Self {
            novelty: 0.4,
            weakness: 0.35,
            staleness: 0.25,
            staleness_horizon_days: 30,
        }
    }
}

/// One prioritized queue entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewEntry {
    /// The activity to review
    pub activity: Activity,
    /// Composite priority score in `[0, 1]`, higher first
    pub score: f64,
}

/// Review-queue builder.
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    weights: ReviewWeights,
}

impl ReviewQueue {
    /// Create a queue with custom weights.
    pub fn new(weights: ReviewWeights) -> Self {
        Self { weights }
    }

    /// Compute the prioritized queue for the given day.
    ///
    /// Ties break on activity id, so the ordering is total and stable
    /// under recomputation.
    pub fn prioritize(
        &self,
        activities: &[Activity],
        signals: &HashMap<String, ReviewSignal>,
        today: NaiveDate,
    ) -> Vec<ReviewEntry> {
        let mut entries: Vec<ReviewEntry> = activities
            .iter()
            .map(|activity| ReviewEntry {
                score: self.score(activity, signals.get(&activity.id), today),
                activity: activity.clone(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.activity.id.cmp(&b.activity.id))
        });
        entries
    }

    fn score(&self, _activity: &Activity, signal: Option<&ReviewSignal>, today: NaiveDate) -> f64 {
        let w = &self.weights;
        let signal = match signal {
            // Never offered: maximally novel and maximally stale.
            None => return w.novelty + w.staleness,
            Some(signal) => signal,
        };

        let novelty = if signal.attempts == 0 { 1.0 } else { 0.0 };
        let weakness = 1.0 - signal.success_rate();
        let staleness = match signal.last_completed {
            None => 1.0,
            Some(last) => {
                let days = (today - last).num_days().max(0) as f64;
                (days / f64::from(w.staleness_horizon_days.max(1))).min(1.0)
            }
        };

        w.novelty * novelty + w.weakness * weakness + w.staleness * staleness
    }
}
