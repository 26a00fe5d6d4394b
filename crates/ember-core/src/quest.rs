//! Quests: one-way objectives over accumulated progress.
//!
//! A quest completes when its condition predicate first holds against the
//! evaluation context; completion grants the quest's reward exactly once.
//! Re-evaluating a completed quest is a no-op. Period rollover (resetting
//! quests for a new week, say) is the embedding layer's concern.

use serde::{Deserialize, Serialize};

use crate::events::{RewardEvent, RewardReason};

/// Completion condition for a quest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum QuestCondition {
    /// Lifetime points reached the target
    PointsAtLeast(u64),
    /// Current streak reached the target length
    StreakAtLeast(u32),
    /// Completions today reached the target count
    CompletionsAtLeast(u32),
    /// Every activity in today's selection is complete
    FullDayComplete,
}

impl QuestCondition {
    /// Evaluate the predicate against the context.
    pub fn holds(&self, ctx: &QuestContext) -> bool {
        match self {
            QuestCondition::PointsAtLeast(target) => ctx.total_points >= *target,
            QuestCondition::StreakAtLeast(target) => ctx.current_streak >= *target,
            QuestCondition::CompletionsAtLeast(target) => ctx.completed_today >= *target,
            QuestCondition::FullDayComplete => {
                ctx.selection_size > 0 && ctx.completed_today >= ctx.selection_size
            }
        }
    }
}

/// A higher-level objective with a one-time reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quest {
    /// Stable identifier
    pub id: String,
    /// Human-readable description
    pub title: String,
    /// Predicate that completes the quest
    pub condition: QuestCondition,
    /// Points granted on completion
    pub reward_points: u32,
    /// Whether the reward has been granted
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Create a new, incomplete quest.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        condition: QuestCondition,
        reward_points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            condition,
            reward_points,
            completed: false,
        }
    }
}

/// Snapshot of progress state that quest predicates see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestContext {
    /// Activities completed in today's selection
    pub completed_today: u32,
    /// Size of today's selection
    pub selection_size: u32,
    /// Lifetime accumulated points
    pub total_points: u64,
    /// Current streak length
    pub current_streak: u32,
}

/// Evaluate all quests against the context.
///
/// Quests transitioning false -> true are marked completed and emit one
/// reward event each. Already-completed quests never fire again.
pub fn evaluate_quests(quests: &mut [Quest], ctx: &QuestContext) -> Vec<RewardEvent> {
    let mut rewards = Vec::new();
    for quest in quests.iter_mut() {
        if quest.completed {
            continue;
        }
        if quest.condition.holds(ctx) {
            quest.completed = true;
            rewards.push(RewardEvent::now(
                quest.reward_points,
                RewardReason::QuestComplete,
            ));
        }
    }
    rewards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> QuestContext {
        QuestContext {
            completed_today: 2,
            selection_size: 4,
            total_points: 120,
            current_streak: 5,
        }
    }

    #[test]
    fn test_conditions_evaluate() {
        let c = ctx();
        assert!(QuestCondition::PointsAtLeast(100).holds(&c));
        assert!(!QuestCondition::PointsAtLeast(121).holds(&c));
        assert!(QuestCondition::StreakAtLeast(5).holds(&c));
        assert!(QuestCondition::CompletionsAtLeast(2).holds(&c));
        assert!(!QuestCondition::FullDayComplete.holds(&c));
    }

    #[test]
    fn test_full_day_requires_nonempty_selection() {
        let empty = QuestContext::default();
        assert!(!QuestCondition::FullDayComplete.holds(&empty));
    }

    #[test]
    fn test_reward_fires_once() {
        let mut quests = vec![Quest::new(
            "q1",
            "Reach 100 points",
            QuestCondition::PointsAtLeast(100),
            50,
        )];
        let rewards = evaluate_quests(&mut quests, &ctx());
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].points, 50);
        assert_eq!(rewards[0].reason, RewardReason::QuestComplete);
        assert!(quests[0].completed);

        // Second evaluation is a no-op.
        let again = evaluate_quests(&mut quests, &ctx());
        assert!(again.is_empty());
    }

    #[test]
    fn test_unmet_quest_stays_open() {
        let mut quests = vec![Quest::new(
            "q2",
            "Ten-day streak",
            QuestCondition::StreakAtLeast(10),
            100,
        )];
        let rewards = evaluate_quests(&mut quests, &ctx());
        assert!(rewards.is_empty());
        assert!(!quests[0].completed);
    }

    #[test]
    fn test_condition_serde_roundtrip() {
        let quest = Quest::new("q3", "Full day", QuestCondition::FullDayComplete, 25);
        let json = serde_json::to_string(&quest).unwrap();
        let back: Quest = serde_json::from_str(&json).unwrap();
        assert_eq!(quest, back);
    }
}
