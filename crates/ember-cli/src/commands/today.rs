use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use ember_core::Catalog;

use crate::common::{self, Context};

#[derive(Args)]
pub struct TodayArgs {
    /// Catalog JSON file with candidate activities
    #[arg(long)]
    pub catalog: PathBuf,

    /// Narrow the pool to one category
    #[arg(long)]
    pub category: Option<String>,

    /// Calendar date to select for (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TodayArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&args.catalog)?;
    let pool = match &args.category {
        Some(category) => catalog.pool_for_category(category),
        None => catalog.pool(),
    };

    let today = common::resolve_date(args.date);
    let mut engine = ctx.engine()?;
    let selection = engine.ensure_selection(today, &pool).clone();
    let progress = engine.goal_progress();
    ctx.store().save(engine.state())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    println!("Selection for {}:", selection.date);
    for activity in &selection.activities {
        let mark = if activity.completed { "x" } else { " " };
        println!(
            "  [{mark}] {}  {} ({} pts, {})",
            activity.id, activity.title, activity.points, activity.impact
        );
    }
    println!("Progress: {progress}%");
    Ok(())
}
