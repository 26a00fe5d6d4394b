//! Session orchestration for the daily engagement loop.
//!
//! The engine owns a snapshot of persisted state and applies the daily
//! flow to it: ensure today's selection exists, record completions, award
//! momentum-scaled points, advance the streak, and evaluate quests. All
//! state is explicit; `today` is always an argument, never read from the
//! clock inside the logic, so every operation is replayable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::activity::Activity;
use crate::error::ValidationError;
use crate::events::{RewardEvent, RewardReason};
use crate::progress::goal_progress;
use crate::quest::{evaluate_quests, Quest, QuestContext};
use crate::review::ReviewSignal;
use crate::selector::{DailySelection, DailySelector, QuotaSet};
use crate::storage::Config;
use crate::streak::{MilestoneSchedule, MomentumPolicy, StreakState};

/// The persisted-state shape: everything the engine reads at session start
/// and writes back after each mutating operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineState {
    /// Today's selection, if one has been derived
    pub selection: Option<DailySelection>,
    /// Consecutive-day streak bookkeeping
    pub streak: StreakState,
    /// Active quests for the current tracking period
    pub quests: Vec<Quest>,
    /// Lifetime accumulated points
    pub total_points: u64,
    /// Per-activity review signals, keyed by activity id
    pub signals: HashMap<String, ReviewSignal>,
}

/// Orchestrates selection, completion, streaks, and quests over a state
/// snapshot.
#[derive(Debug, Clone)]
pub struct EngagementEngine {
    state: EngineState,
    selector: DailySelector,
    momentum: MomentumPolicy,
    milestones: MilestoneSchedule,
}

impl EngagementEngine {
    /// Create an engine with default policies.
    pub fn new(state: EngineState) -> Self {
        Self {
            state,
            selector: DailySelector::default(),
            momentum: MomentumPolicy::default(),
            milestones: MilestoneSchedule::default(),
        }
    }

    /// Create an engine with policies taken from configuration.
    pub fn from_config(state: EngineState, config: &Config) -> Self {
        Self {
            state,
            selector: DailySelector::new(config.quotas()),
            momentum: config.momentum,
            milestones: config.milestones.clone(),
        }
    }

    /// Override the selection quotas.
    pub fn with_quotas(mut self, quotas: QuotaSet) -> Self {
        self.selector = DailySelector::new(quotas);
        self
    }

    /// Override the momentum policy.
    pub fn with_momentum(mut self, momentum: MomentumPolicy) -> Self {
        self.momentum = momentum;
        self
    }

    /// Current state snapshot.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Consume the engine, yielding the state for persistence.
    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Register a quest for the current tracking period.
    pub fn add_quest(&mut self, quest: Quest) {
        self.state.quests.push(quest);
    }

    /// Ensure a selection exists for `today`.
    ///
    /// A stored selection dated `today` is reused as-is, completion flags
    /// included; anything else (no selection, or yesterday's) is replaced
    /// by a fresh deterministic derivation from the pool.
    pub fn ensure_selection(&mut self, today: NaiveDate, pool: &[Activity]) -> &DailySelection {
        if self
            .state
            .selection
            .as_ref()
            .is_some_and(|s| s.date != today)
        {
            self.state.selection = None;
        }
        let selector = &self.selector;
        self.state
            .selection
            .get_or_insert_with(|| selector.select(today, pool))
    }

    /// Record completion of an activity in today's selection.
    ///
    /// Idempotent: completing an already-completed activity returns no
    /// events and awards nothing. Otherwise the streak rule runs first,
    /// then points are scaled against the updated streak, so the
    /// completion that lifts the streak to the momentum threshold already
    /// earns the multiplier.
    pub fn complete(
        &mut self,
        activity_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<RewardEvent>, ValidationError> {
        let base_points = {
            let selection = self
                .state
                .selection
                .as_mut()
                .ok_or(ValidationError::NoSelection)?;
            let activity = selection
                .find_mut(activity_id)
                .ok_or_else(|| ValidationError::UnknownActivity(activity_id.to_string()))?;
            if activity.completed {
                return Ok(Vec::new());
            }
            activity.completed = true;
            activity.points
        };

        let mut events = Vec::new();

        let advance = self.state.streak.observe_completion(today);
        let points = self
            .momentum
            .scaled_points(base_points, self.state.streak.current_streak);
        self.state.total_points += u64::from(points);
        events.push(RewardEvent::now(points, RewardReason::TaskComplete));

        if advance.changed() {
            if let Some(bonus) = self.milestones.bonus_for(self.state.streak.current_streak) {
                self.state.total_points += u64::from(bonus);
                events.push(RewardEvent::now(bonus, RewardReason::StreakMilestone));
            }
        }

        let signal = self.state.signals.entry(activity_id.to_string()).or_default();
        signal.attempts += 1;
        signal.successes += 1;
        signal.last_completed = Some(today);

        events.extend(self.evaluate_quests());
        Ok(events)
    }

    /// Percentage completion of today's selection.
    pub fn goal_progress(&self) -> u8 {
        self.state
            .selection
            .as_ref()
            .map_or(0, goal_progress)
    }

    fn evaluate_quests(&mut self) -> Vec<RewardEvent> {
        let (completed_today, selection_size) = self
            .state
            .selection
            .as_ref()
            .map_or((0, 0), |s| (s.completed_count() as u32, s.len() as u32));
        let ctx = QuestContext {
            completed_today,
            selection_size,
            total_points: self.state.total_points,
            current_streak: self.state.streak.current_streak,
        };
        let rewards = evaluate_quests(&mut self.state.quests, &ctx);
        for reward in &rewards {
            self.state.total_points += u64::from(reward.points);
        }
        rewards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Impact;
    use crate::quest::QuestCondition;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn pool() -> Vec<Activity> {
        vec![
            Activity::new("h1", "Ship feature", 20, Impact::High, "dev"),
            Activity::new("h2", "Write proposal", 20, Impact::High, "dev"),
            Activity::new("h3", "Customer call", 20, Impact::High, "dev"),
            Activity::new("m1", "Review backlog", 10, Impact::Medium, "dev"),
            Activity::new("m2", "Update docs", 10, Impact::Medium, "dev"),
            Activity::new("l1", "Tidy inbox", 5, Impact::Low, "dev"),
            Activity::new("l2", "Log metrics", 5, Impact::Low, "dev"),
        ]
    }

    #[test]
    fn test_ensure_selection_reuses_same_day() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let first = engine.ensure_selection(today, &pool()).clone();
        let id = first.activities[0].id.clone();
        engine.complete(&id, today).unwrap();

        // Re-ensuring on the same day keeps the completion flag.
        let again = engine.ensure_selection(today, &pool()).clone();
        assert_eq!(again.date, today);
        assert!(again.find(&id).unwrap().completed);
    }

    #[test]
    fn test_day_boundary_replaces_selection() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let first = engine.ensure_selection(date("2024-03-15"), &pool()).clone();
        let id = first.activities[0].id.clone();
        engine.complete(&id, date("2024-03-15")).unwrap();

        let next = engine.ensure_selection(date("2024-03-16"), &pool()).clone();
        assert_eq!(next.date, date("2024-03-16"));
        assert!(next.activities.iter().all(|a| !a.completed));
    }

    #[test]
    fn test_completion_awards_base_points() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        let activity = selection.activities[0].clone();

        let events = engine.complete(&activity.id, today).unwrap();
        assert_eq!(events[0].reason, RewardReason::TaskComplete);
        assert_eq!(events[0].points, activity.points);
        assert_eq!(engine.state().total_points, u64::from(activity.points));
    }

    #[test]
    fn test_double_completion_is_no_op() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        let id = selection.activities[0].id.clone();

        engine.complete(&id, today).unwrap();
        let points_after_first = engine.state().total_points;
        let events = engine.complete(&id, today).unwrap();
        assert!(events.is_empty());
        assert_eq!(engine.state().total_points, points_after_first);
    }

    #[test]
    fn test_unknown_activity_is_error() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        engine.ensure_selection(today, &pool());
        let err = engine.complete("nope", today).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownActivity(_)));
    }

    #[test]
    fn test_completion_without_selection_is_error() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let err = engine.complete("h1", date("2024-03-15")).unwrap_err();
        assert!(matches!(err, ValidationError::NoSelection));
    }

    #[test]
    fn test_streak_advances_once_per_day() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        for activity in &selection.activities {
            engine.complete(&activity.id, today).unwrap();
        }
        assert_eq!(engine.state().streak.current_streak, 1);
        assert!(engine
            .state()
            .selection
            .as_ref()
            .unwrap()
            .is_fully_complete());
    }

    #[test]
    fn test_momentum_applies_at_threshold() {
        let mut state = EngineState::default();
        state.streak = StreakState {
            current_streak: 2,
            longest_streak: 2,
            last_active_date: Some(date("2024-03-14")),
            streak_start_date: Some(date("2024-03-13")),
        };
        let mut engine = EngagementEngine::new(state);
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        let activity = selection.activities[0].clone();

        // This completion lifts the streak to 3, so momentum applies.
        let events = engine.complete(&activity.id, today).unwrap();
        let expected = (f64::from(activity.points) * 1.5).round() as u32;
        assert_eq!(events[0].points, expected);
    }

    #[test]
    fn test_milestone_fires_once() {
        let mut state = EngineState::default();
        state.streak = StreakState {
            current_streak: 2,
            longest_streak: 2,
            last_active_date: Some(date("2024-03-14")),
            streak_start_date: Some(date("2024-03-13")),
        };
        let mut engine = EngagementEngine::new(state);
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();

        let first = engine.complete(&selection.activities[0].id, today).unwrap();
        assert!(first
            .iter()
            .any(|e| e.reason == RewardReason::StreakMilestone));

        // Second completion the same day: streak already counted, no
        // second milestone.
        let second = engine.complete(&selection.activities[1].id, today).unwrap();
        assert!(!second
            .iter()
            .any(|e| e.reason == RewardReason::StreakMilestone));
    }

    #[test]
    fn test_full_day_quest_completes() {
        let mut engine = EngagementEngine::new(EngineState::default());
        engine.add_quest(Quest::new(
            "q1",
            "Clean sweep",
            QuestCondition::FullDayComplete,
            40,
        ));
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();

        let mut quest_rewards = 0;
        for activity in &selection.activities {
            let events = engine.complete(&activity.id, today).unwrap();
            quest_rewards += events
                .iter()
                .filter(|e| e.reason == RewardReason::QuestComplete)
                .count();
        }
        assert_eq!(quest_rewards, 1);
        assert!(engine.state().quests[0].completed);
    }

    #[test]
    fn test_goal_progress_tracks_completions() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        assert_eq!(engine.goal_progress(), 0);

        engine.complete(&selection.activities[0].id, today).unwrap();
        assert_eq!(engine.goal_progress(), 25);
    }

    #[test]
    fn test_signals_updated_on_completion() {
        let mut engine = EngagementEngine::new(EngineState::default());
        let today = date("2024-03-15");
        let selection = engine.ensure_selection(today, &pool()).clone();
        let id = selection.activities[0].id.clone();
        engine.complete(&id, today).unwrap();

        let signal = engine.state().signals.get(&id).unwrap();
        assert_eq!(signal.attempts, 1);
        assert_eq!(signal.successes, 1);
        assert_eq!(signal.last_completed, Some(today));
    }
}
