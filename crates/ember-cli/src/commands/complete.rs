use chrono::NaiveDate;
use clap::Args;

use crate::common::{self, Context};

#[derive(Args)]
pub struct CompleteArgs {
    /// Id of the activity in today's selection
    pub activity_id: String,

    /// Calendar date of the completion (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output emitted reward events as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CompleteArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let today = common::resolve_date(args.date);
    let mut engine = ctx.engine()?;
    let events = engine.complete(&args.activity_id, today)?;
    let progress = engine.goal_progress();
    let streak = engine.state().streak.current_streak;
    let total = engine.state().total_points;
    ctx.store().save(engine.state())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("Already completed; nothing awarded.");
    }
    for event in &events {
        println!("+{} points ({:?})", event.points, event.reason);
    }
    println!("Progress: {progress}%  Streak: {streak}  Total: {total}");
    Ok(())
}
