//! # Ember Core Library
//!
//! This library provides the core business logic for Ember, a daily
//! engagement tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! embedding being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Selector**: A date-seeded, deterministic daily activity selector
//!   that honors per-impact quotas
//! - **Streak**: A calendar-day state machine tracking consecutive-day
//!   engagement and momentum point scaling
//! - **Quests**: One-way objectives evaluated as predicates over
//!   accumulated progress
//! - **Storage**: JSON-based state persistence and TOML-based
//!   configuration management
//!
//! ## Key Components
//!
//! - [`EngagementEngine`]: Session orchestrator tying selection,
//!   completion, streaks, and quests together
//! - [`DailySelector`]: Deterministic per-day activity selection
//! - [`StreakState`]: Consecutive-day streak bookkeeping
//! - [`StateStore`]: Engine state persistence

pub mod activity;
pub mod engine;
pub mod error;
pub mod events;
pub mod progress;
pub mod quest;
pub mod review;
pub mod selector;
pub mod storage;
pub mod streak;

pub use activity::{Activity, Impact};
pub use engine::{EngagementEngine, EngineState};
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use events::{RewardEvent, RewardReason};
pub use progress::goal_progress;
pub use quest::{Quest, QuestContext, QuestCondition};
pub use review::{ReviewEntry, ReviewQueue, ReviewSignal, ReviewWeights};
pub use selector::{DailySelection, DailySelector, QuotaSet};
pub use storage::{Catalog, Config, StateStore};
pub use streak::{MilestoneSchedule, MomentumPolicy, StreakAdvance, StreakState};
