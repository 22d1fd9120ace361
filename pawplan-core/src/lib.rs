//! pawplan-core: data model and planning engine for the PawPlan care
//! scheduler.
//!
//! The engine turns one caregiver's pending activities into a bounded-time
//! daily plan: conflict pre-check, priority ordering, greedy budget fit,
//! dependency-aware slot assignment, and an overlap post-check.

pub mod activity;
pub mod budget;
pub mod caregiver;
pub mod conflict;
pub mod dependent;
pub mod engine;
pub mod plan;
pub mod slots;

pub use activity::{Activity, ActivityFilter, Category, Priority, Recurrence};
pub use budget::{FitResult, fit_to_budget, plan_order};
pub use caregiver::{
    Caregiver, DEFAULT_AVAILABLE_MINUTES, sort_by_category, sort_by_due_time, sort_by_duration,
    sort_by_priority,
};
pub use conflict::{
    ConflictKind, SchedulingConflict, Severity, detect_conflicts, detect_overlaps,
};
pub use dependent::Dependent;
pub use engine::Planner;
pub use plan::{DailyPlan, ScheduledTask, SlotOutcome};
