//! Consecutive-day streak state machine and momentum scaling.
//!
//! The streak advances at most once per calendar day, keyed purely on the
//! comparison between `today` and the last active date. Completing ten
//! activities in one day counts the same as completing one; skipping more
//! than one day breaks the streak. The longest streak is retained across
//! breaks.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Outcome of observing a completion for streak purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakAdvance {
    /// First completion ever; streak starts at 1
    Started,
    /// Completion on the day after the last active date; streak grew by 1
    Extended,
    /// Completion on an already-counted day; no change
    AlreadyCounted,
    /// Gap of more than one day; streak restarted at 1
    Restarted,
}

impl StreakAdvance {
    /// Whether this outcome changed the current streak value.
    pub fn changed(&self) -> bool {
        !matches!(self, StreakAdvance::AlreadyCounted)
    }
}

/// Consecutive-day engagement streak.
///
/// A missing persisted state deserializes to the zero/unset default;
/// losing this record degrades to "streak of zero", never a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakState {
    /// Consecutive days with at least one completed activity
    pub current_streak: u32,
    /// Historical maximum of `current_streak`
    pub longest_streak: u32,
    /// Last day on which a completion occurred
    pub last_active_date: Option<NaiveDate>,
    /// Day on which the current streak began
    pub streak_start_date: Option<NaiveDate>,
}

impl StreakState {
    /// Apply the calendar-day transition rule for a completion on `today`.
    ///
    /// Evaluated once per day: the first completion of a day advances (or
    /// starts, or restarts) the streak and any further completions that
    /// day are no-ops. A `today` earlier than the last active date (clock
    /// rollback) is treated as already counted.
    pub fn observe_completion(&mut self, today: NaiveDate) -> StreakAdvance {
        let last = match self.last_active_date {
            None => {
                self.current_streak = 1;
                self.longest_streak = self.longest_streak.max(1);
                self.streak_start_date = Some(today);
                self.last_active_date = Some(today);
                return StreakAdvance::Started;
            }
            Some(last) => last,
        };

        if today <= last {
            return StreakAdvance::AlreadyCounted;
        }

        if Some(today) == last.checked_add_days(Days::new(1)) {
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
            self.last_active_date = Some(today);
            StreakAdvance::Extended
        } else {
            // Gap of more than one day. Longest streak survives the break.
            self.current_streak = 1;
            self.longest_streak = self.longest_streak.max(1);
            self.streak_start_date = Some(today);
            self.last_active_date = Some(today);
            StreakAdvance::Restarted
        }
    }
}

/// Point scaling that rewards consistency.
///
/// Once the current streak reaches the threshold, every completion's
/// points are scaled by the multiplier, not just the first of the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MomentumPolicy {
    /// Streak length at which scaling kicks in
    pub threshold: u32,
    /// Multiplier applied to completion points
    pub multiplier: f64,
}

impl Default for MomentumPolicy {
    fn default() -> Self {
        Self {
            threshold: 3,
            multiplier: 1.5,
        }
    }
}

impl MomentumPolicy {
    /// Points awarded for a completion at the given streak length.
    pub fn scaled_points(&self, points: u32, current_streak: u32) -> u32 {
        if current_streak >= self.threshold {
            (f64::from(points) * self.multiplier).round() as u32
        } else {
            points
        }
    }
}

/// One bonus tier of the milestone schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneTier {
    /// Streak length that triggers the bonus
    pub streak: u32,
    /// Bonus points granted once when the streak reaches this length
    pub bonus: u32,
}

/// Ordered streak milestones, each paying a one-time bonus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneSchedule {
    /// Bonus tiers, ascending by streak length
    pub tiers: Vec<MilestoneTier>,
}

impl Default for MilestoneSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                MilestoneTier { streak: 3, bonus: 15 },
                MilestoneTier { streak: 7, bonus: 50 },
                MilestoneTier {
                    streak: 30,
                    bonus: 250,
                },
            ],
        }
    }
}

impl MilestoneSchedule {
    /// Bonus for a streak that just advanced to `current_streak`, if any.
    ///
    /// Only an exact match pays out; the streak advances one day at a time,
    /// so each tier fires at most once per streak run.
    pub fn bonus_for(&self, current_streak: u32) -> Option<u32> {
        self.tiers
            .iter()
            .find(|t| t.streak == current_streak)
            .map(|t| t.bonus)
    }
}
