//! Slot assignment: dependency-aware, back-to-back interval placement.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::activity::Activity;
use crate::plan::{ScheduledTask, SlotOutcome};

/// Assign contiguous time slots to the fitted activities, starting at
/// `start` and respecting dependency readiness.
///
/// Each round scans the remaining pool in order and takes the first activity
/// whose dependencies have all been scheduled. When nothing is ready (a
/// dependency points outside the fitted set, or a cycle survived the
/// pre-check) the pool's first entry is forced through with
/// `SlotOutcome::ForcedUnmetDependency` so the pass always terminates.
///
/// Dependency descriptions are resolved to activity ids once at entry; with
/// duplicate descriptions the first occurrence wins, and descriptions that
/// resolve to nothing in the fitted set stay unmet.
pub fn assign_slots(fitted: Vec<Activity>, start: DateTime<Utc>) -> Vec<ScheduledTask> {
    let mut by_description: HashMap<String, String> = HashMap::new();
    for activity in &fitted {
        by_description
            .entry(activity.description.clone())
            .or_insert_with(|| activity.id.clone());
    }

    let mut pool = fitted;
    let mut satisfied: HashSet<String> = HashSet::new();
    let mut scheduled = Vec::with_capacity(pool.len());
    let mut current_time = start;

    while !pool.is_empty() {
        let ready = pool.iter().position(|activity| {
            activity.dependencies.iter().all(|dep| {
                by_description
                    .get(dep)
                    .is_some_and(|id| satisfied.contains(id))
            })
        });

        let (index, outcome) = match ready {
            Some(index) => (index, SlotOutcome::Ok),
            None => (0, SlotOutcome::ForcedUnmetDependency),
        };

        let activity = pool.remove(index);
        satisfied.insert(activity.id.clone());

        let slot = ScheduledTask::new(activity, current_time, outcome);
        current_time = slot.end_time;
        scheduled.push(slot);
    }

    scheduled
}
