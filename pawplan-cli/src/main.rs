use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use pawplan_core::{Activity, Caregiver, Category, Dependent, Planner, Priority};

mod report;
mod roster;

#[derive(Parser, Debug)]
#[command(name = "pawplan", version, about = "PawPlan daily care planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a day from a built-in showcase roster
    Demo,

    /// Plan a day from a TOML roster file
    Plan {
        /// Roster file (defaults to ./roster.toml)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Override the roster's available minutes
        #[arg(long)]
        budget: Option<i32>,

        /// Start time "YYYY-MM-DD HH:MM" (UTC); defaults to now
        #[arg(long)]
        start: Option<String>,

        /// Skip conflict detection
        #[arg(long)]
        no_conflicts: bool,
    },

    /// Run the conflict pre-check without planning
    Conflicts {
        /// Roster file (defaults to ./roster.toml)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Override the roster's available minutes
        #[arg(long)]
        budget: Option<i32>,

        /// Start time "YYYY-MM-DD HH:MM" (UTC); defaults to now
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => run_demo(),
        Command::Plan {
            roster,
            budget,
            start,
            no_conflicts,
        } => run_plan(roster, budget, start, !no_conflicts),
        Command::Conflicts {
            roster,
            budget,
            start,
        } => run_conflicts(roster, budget, start),
    }
}

fn run_plan(
    roster: Option<PathBuf>,
    budget: Option<i32>,
    start: Option<String>,
    check_conflicts: bool,
) -> Result<()> {
    let mut owner = load_caregiver(roster)?;
    if let Some(minutes) = budget {
        owner.set_available_minutes(minutes);
    }
    let start = parse_start(start)?;

    let mut planner = Planner::new(owner.available_minutes);
    let plan = planner.generate_daily_plan(&owner.pending_activities(), start, check_conflicts);
    report::print_plan(&owner, &plan, planner.conflicts());
    Ok(())
}

fn run_conflicts(
    roster: Option<PathBuf>,
    budget: Option<i32>,
    start: Option<String>,
) -> Result<()> {
    let mut owner = load_caregiver(roster)?;
    if let Some(minutes) = budget {
        owner.set_available_minutes(minutes);
    }
    let start = parse_start(start)?;

    let planner = Planner::new(owner.available_minutes);
    let conflicts = planner.detect_conflicts(&owner.pending_activities(), start);
    if conflicts.is_empty() {
        println!("No conflicts detected.");
    } else {
        report::print_conflicts(&conflicts);
    }
    Ok(())
}

/// Showcase roster: tasks added out of order, one dependency, and a
/// same-due-time pair across dependents.
fn run_demo() -> Result<()> {
    let now = Utc::now();
    let mut owner = Caregiver::new("Sarah", 360);

    let mut buddy = Dependent::new("Buddy", "Golden Retriever");
    buddy.add_activity(
        Activity::new(
            "buddy-play",
            "Playtime with Buddy",
            30,
            Priority::Medium,
            now + Duration::hours(4),
            Category::Playtime,
        )?
        .for_dependent("Buddy"),
    )?;
    buddy.add_activity(
        Activity::new(
            "buddy-feed",
            "Feed Buddy breakfast",
            15,
            Priority::High,
            now + Duration::hours(1),
            Category::Feeding,
        )?
        .for_dependent("Buddy"),
    )?;
    buddy.add_activity(
        Activity::new(
            "buddy-walk",
            "Morning walk with Buddy",
            45,
            Priority::High,
            now + Duration::hours(2),
            Category::Walking,
        )?
        .for_dependent("Buddy")
        .with_dependency("Feed Buddy breakfast"),
    )?;
    buddy.add_activity(
        Activity::new(
            "buddy-training",
            "Training session with Buddy",
            30,
            Priority::Medium,
            now + Duration::hours(6),
            Category::Training,
        )?
        .for_dependent("Buddy"),
    )?;

    let mut mittens = Dependent::new("Mittens", "Cat");
    mittens.add_activity(
        Activity::new(
            "mittens-groom",
            "Brush Mittens",
            20,
            Priority::Medium,
            now + Duration::hours(3),
            Category::Grooming,
        )?
        .for_dependent("Mittens"),
    )?;
    mittens.add_activity(
        Activity::new(
            "mittens-play",
            "Interactive play with Mittens",
            25,
            Priority::Low,
            now + Duration::hours(5),
            Category::Playtime,
        )?
        .for_dependent("Mittens"),
    )?;
    mittens.add_activity(
        Activity::new(
            "mittens-feed",
            "Feed Mittens",
            10,
            Priority::High,
            now + Duration::minutes(90),
            Category::Feeding,
        )?
        .for_dependent("Mittens"),
    )?;
    // Due at the same instant as Buddy's training session.
    mittens.add_activity(
        Activity::new(
            "mittens-meds",
            "Give Mittens medication",
            5,
            Priority::High,
            now + Duration::hours(6),
            Category::Medication,
        )?
        .for_dependent("Mittens"),
    )?;

    owner.add_dependent(buddy);
    owner.add_dependent(mittens);

    let mut planner = Planner::new(owner.available_minutes);
    let plan = planner.generate_daily_plan(&owner.pending_activities(), now, true);
    report::print_plan(&owner, &plan, planner.conflicts());
    Ok(())
}

fn load_caregiver(path: Option<PathBuf>) -> Result<Caregiver> {
    let path = path.unwrap_or_else(|| PathBuf::from("roster.toml"));
    if !path.exists() {
        bail!("roster not found: {} (pass --roster <path>)", path.display());
    }
    roster::load_roster(&path)
}

fn parse_start(start: Option<String>) -> Result<DateTime<Utc>> {
    match start {
        None => Ok(Utc::now()),
        Some(value) => roster::parse_datetime(&value),
    }
}
