//! Plan output types: time-slotted tasks and the assembled daily plan.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;

/// How a slot came to be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOutcome {
    /// Every dependency was satisfied before this slot was assigned.
    Ok,
    /// Forced placement: at least one dependency was not yet satisfied, but
    /// the activity was scheduled anyway so the assignment pass terminates.
    ForcedUnmetDependency,
}

/// One activity pinned to a concrete time interval. Immutable within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub activity: Activity,
    pub scheduled_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub outcome: SlotOutcome,
}

impl ScheduledTask {
    pub fn new(activity: Activity, scheduled_time: DateTime<Utc>, outcome: SlotOutcome) -> Self {
        let end_time = scheduled_time + Duration::minutes(activity.duration as i64);
        Self {
            activity,
            scheduled_time,
            end_time,
            outcome,
        }
    }
}

/// Output of one planning run. Owned entirely by the caller; holds no
/// references back into the source roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Schedule order, not necessarily priority order.
    pub scheduled: Vec<ScheduledTask>,
    /// Activities that did not fit the time budget.
    pub skipped: Vec<Activity>,
    /// Sum of scheduled durations, minutes.
    pub total_duration: i32,
}

impl DailyPlan {
    pub fn tasks_for_dependent(&self, name: &str) -> Vec<&ScheduledTask> {
        self.scheduled
            .iter()
            .filter(|slot| slot.activity.dependent == name)
            .collect()
    }
}
