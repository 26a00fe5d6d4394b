use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use ember_core::{Catalog, ReviewQueue};

use crate::common::{self, Context};

#[derive(Args)]
pub struct ReviewArgs {
    /// Catalog JSON file with candidate activities
    #[arg(long)]
    pub catalog: PathBuf,

    /// Narrow the pool to one category
    #[arg(long)]
    pub category: Option<String>,

    /// Reference date (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReviewArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&args.catalog)?;
    let pool = match &args.category {
        Some(category) => catalog.pool_for_category(category),
        None => catalog.pool(),
    };

    let today = common::resolve_date(args.date);
    let state = ctx.store().load();
    let queue = ReviewQueue::new(ctx.config()?.review);
    let entries = queue.prioritize(&pool, &state.signals, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  {:.2}  {}  {}",
            entry.score, entry.activity.id, entry.activity.title
        );
    }
    Ok(())
}
