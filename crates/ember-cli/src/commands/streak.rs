use clap::Args;

use crate::common::Context;

#[derive(Args)]
pub struct StreakArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StreakArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let state = ctx.store().load();
    let streak = &state.streak;

    if args.json {
        println!("{}", serde_json::to_string_pretty(streak)?);
        return Ok(());
    }

    println!("Current streak: {} days", streak.current_streak);
    println!("Longest streak: {} days", streak.longest_streak);
    match streak.last_active_date {
        Some(date) => println!("Last active: {date}"),
        None => println!("Last active: never"),
    }
    if let Some(start) = streak.streak_start_date {
        println!("Streak started: {start}");
    }
    println!("Total points: {}", state.total_points);
    Ok(())
}
