//! Deterministic daily activity selector.
//!
//! Given a calendar date and a candidate pool, the selector deterministically
//! shuffles the pool and picks a fixed-size subset honoring per-impact
//! quotas. The same (date, pool, quotas) inputs always produce the same
//! selection, so re-deriving today's set on every launch is safe.
//!
//! The shuffle is a Fisher-Yates permutation driven by a small linear
//! congruential generator seeded from the ISO date string. The seed is
//! date-only: time of day never affects the output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::activity::{Activity, Impact};

/// Derive the day seed from a calendar date.
///
/// The seed is the sum of the byte values of the ISO `YYYY-MM-DD`
/// rendering of the date. Weak as PRNG seeds go, but sufficient for
/// "different each day"; not suitable for anything security-sensitive.
pub fn date_seed(date: NaiveDate) -> u32 {
    date.format("%Y-%m-%d")
        .to_string()
        .bytes()
        .map(u32::from)
        .sum()
}

/// Linear congruential generator with a fixed, portable recurrence.
///
/// `state = (state * 9301 + 49297) mod 233280`. The constants are part of
/// the selection contract: the same seed must always produce the same
/// permutation, across builds and platforms.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 9301;
    const INCREMENT: u32 = 49297;
    const MODULUS: u32 = 233280;

    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        f64::from(self.state) / f64::from(Self::MODULUS)
    }

    /// Next index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

/// In-place Fisher-Yates shuffle driven by the generator.
fn shuffle<T>(items: &mut [T], rng: &mut Lcg) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Desired activity count per impact bucket for one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaSet {
    /// High-impact slots
    pub high: usize,
    /// Medium-impact slots
    pub medium: usize,
    /// Low-impact slots
    pub low: usize,
}

impl Default for QuotaSet {
    fn default() -> Self {
        Self {
            high: 2,
            medium: 1,
            low: 1,
        }
    }
}

impl QuotaSet {
    /// Total selection size.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    /// Quota for a single impact bucket.
    pub fn for_impact(&self, impact: Impact) -> usize {
        match impact {
            Impact::High => self.high,
            Impact::Medium => self.medium,
            Impact::Low => self.low,
        }
    }
}

/// The ordered activity set selected for one calendar day.
///
/// Immutable once produced for a (date, pool) pair, apart from the
/// per-activity `completed` flags mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySelection {
    /// The day this selection was derived for
    pub date: NaiveDate,
    /// Selected activities, in selection order
    pub activities: Vec<Activity>,
}

impl DailySelection {
    /// Number of activities in the selection.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Number of completed activities.
    pub fn completed_count(&self) -> usize {
        self.activities.iter().filter(|a| a.completed).count()
    }

    /// Whether every activity in the selection is completed.
    pub fn is_fully_complete(&self) -> bool {
        !self.activities.is_empty() && self.activities.iter().all(|a| a.completed)
    }

    /// Look up an activity by id.
    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Look up an activity by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id == id)
    }
}

/// Deterministic daily selector.
#[derive(Debug, Clone, Default)]
pub struct DailySelector {
    quotas: QuotaSet,
}

impl DailySelector {
    /// Create a selector with the given quotas.
    pub fn new(quotas: QuotaSet) -> Self {
        Self { quotas }
    }

    /// Quotas this selector fills.
    pub fn quotas(&self) -> QuotaSet {
        self.quotas
    }

    /// Select the day's activities from the candidate pool.
    ///
    /// Two passes over the shuffled pool:
    /// 1. Quota-first: accept an activity if its impact bucket still has
    ///    room and its title has not been selected yet (title is the dedup
    ///    key, not id).
    /// 2. Backfill: if some bucket ran dry, accept any not-yet-seen title
    ///    until the selection is full or the pool is exhausted.
    ///
    /// A pool smaller than the total quota yields a shorter selection;
    /// shortfall is documented behavior, not an error.
    pub fn select(&self, date: NaiveDate, pool: &[Activity]) -> DailySelection {
        let n = self.quotas.total();
        let mut shuffled: Vec<Activity> = pool.to_vec();
        let mut rng = Lcg::new(date_seed(date));
        shuffle(&mut shuffled, &mut rng);

        let mut picked: Vec<Activity> = Vec::with_capacity(n);
        let mut seen_titles: HashSet<String> = HashSet::new();
        let mut filled = QuotaSet {
            high: 0,
            medium: 0,
            low: 0,
        };

        for activity in &shuffled {
            if picked.len() == n {
                break;
            }
            if seen_titles.contains(&activity.title) {
                continue;
            }
            let bucket = match activity.impact {
                Impact::High => &mut filled.high,
                Impact::Medium => &mut filled.medium,
                Impact::Low => &mut filled.low,
            };
            if *bucket >= self.quotas.for_impact(activity.impact) {
                continue;
            }
            *bucket += 1;
            seen_titles.insert(activity.title.clone());
            picked.push(activity.clone());
        }

        // Backfill ignores quotas; picked titles are already in seen_titles,
        // so nothing is selected twice.
        if picked.len() < n {
            for activity in &shuffled {
                if picked.len() == n {
                    break;
                }
                if seen_titles.contains(&activity.title) {
                    continue;
                }
                seen_titles.insert(activity.title.clone());
                picked.push(activity.clone());
            }
        }

        DailySelection {
            date,
            activities: picked,
        }
    }
}
