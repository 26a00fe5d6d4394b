use clap::{Subcommand, ValueEnum};
use ember_core::{Quest, QuestCondition};

use crate::common::Context;

#[derive(Clone, Copy, ValueEnum)]
pub enum ConditionKind {
    /// Lifetime points reach the target
    Points,
    /// Streak reaches the target length
    Streak,
    /// Completions today reach the target
    Completions,
    /// Every activity in today's selection is complete
    FullDay,
}

#[derive(Subcommand)]
pub enum QuestAction {
    /// List quests
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a quest
    Add {
        /// Quest id
        id: String,
        /// Human-readable title
        title: String,
        /// Completion condition kind
        #[arg(long, value_enum)]
        condition: ConditionKind,
        /// Condition target (ignored for full-day)
        #[arg(long, default_value_t = 0)]
        target: u64,
        /// Reward points
        #[arg(long)]
        reward: u32,
    },
}

pub fn run(action: QuestAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.store();
    match action {
        QuestAction::List { json } => {
            let state = store.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&state.quests)?);
                return Ok(());
            }
            if state.quests.is_empty() {
                println!("No quests.");
            }
            for quest in &state.quests {
                let mark = if quest.completed { "x" } else { " " };
                println!(
                    "  [{mark}] {}  {} (+{} pts)",
                    quest.id, quest.title, quest.reward_points
                );
            }
        }
        QuestAction::Add {
            id,
            title,
            condition,
            target,
            reward,
        } => {
            let condition = match condition {
                ConditionKind::Points => QuestCondition::PointsAtLeast(target),
                ConditionKind::Streak => QuestCondition::StreakAtLeast(target as u32),
                ConditionKind::Completions => QuestCondition::CompletionsAtLeast(target as u32),
                ConditionKind::FullDay => QuestCondition::FullDayComplete,
            };
            let mut state = store.load();
            state.quests.push(Quest::new(&id, title, condition, reward));
            store.save(&state)?;
            println!("Quest added: {id}");
        }
    }
    Ok(())
}
