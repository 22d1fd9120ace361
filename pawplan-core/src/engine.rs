//! Daily plan engine: one pass composing the conflict pre-check, priority
//! ordering, budget fitting, slot assignment, and the overlap post-check.

use chrono::{DateTime, Utc};

use crate::activity::Activity;
use crate::budget::{fit_to_budget, plan_order};
use crate::conflict::{SchedulingConflict, detect_conflicts, detect_overlaps};
use crate::plan::DailyPlan;
use crate::slots::assign_slots;

/// Planning engine for one caregiver's day.
///
/// Holds the daily time budget and the conflict report of the most recent
/// run. Conflicts are advisory: a plan is always produced, and the stored
/// report is replaced (not merged) on each run.
#[derive(Debug, Clone)]
pub struct Planner {
    budget_minutes: i32,
    conflicts: Vec<SchedulingConflict>,
}

impl Planner {
    pub fn new(budget_minutes: i32) -> Self {
        Self {
            budget_minutes,
            conflicts: Vec::new(),
        }
    }

    pub fn budget_minutes(&self) -> i32 {
        self.budget_minutes
    }

    pub fn set_budget(&mut self, minutes: i32) {
        self.budget_minutes = minutes;
    }

    /// Conflicts from the most recent planning run (or explicit pre-check
    /// stored by the caller). Detector-execution order: cycle, deadlines,
    /// budget, duplicates, then overlaps.
    pub fn conflicts(&self) -> &[SchedulingConflict] {
        &self.conflicts
    }

    /// Standalone pre-check against this planner's budget. Does not touch
    /// the stored report.
    pub fn detect_conflicts(
        &self,
        activities: &[Activity],
        start: DateTime<Utc>,
    ) -> Vec<SchedulingConflict> {
        detect_conflicts(activities, start, self.budget_minutes)
    }

    /// Plan the day. The input is treated as a read-only snapshot of one
    /// caregiver's pending activities; ordering of the input is irrelevant.
    pub fn generate_daily_plan(
        &mut self,
        activities: &[Activity],
        start: DateTime<Utc>,
        check_conflicts: bool,
    ) -> DailyPlan {
        self.conflicts = if check_conflicts {
            detect_conflicts(activities, start, self.budget_minutes)
        } else {
            Vec::new()
        };

        let fit = fit_to_budget(plan_order(activities), self.budget_minutes);
        let scheduled = assign_slots(fit.fitted, start);

        if check_conflicts {
            self.conflicts.extend(detect_overlaps(&scheduled));
        }

        let total_duration = scheduled.iter().map(|slot| slot.activity.duration).sum();
        DailyPlan {
            scheduled,
            skipped: fit.skipped,
            total_duration,
        }
    }
}
