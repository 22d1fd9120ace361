//! Priority ordering and greedy time-budget fitting.

use crate::activity::Activity;

/// Planning order: priority ascending (1 = highest first), then due time
/// ascending. Stable, so equal keys keep their input order. Returns a new
/// ordered view; the caller's collection is untouched.
pub fn plan_order(activities: &[Activity]) -> Vec<Activity> {
    let mut ordered = activities.to_vec();
    ordered.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.due_time.cmp(&b.due_time))
    });
    ordered
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitResult {
    pub fitted: Vec<Activity>,
    pub skipped: Vec<Activity>,
}

/// Greedy single pass over priority-ordered activities: accept while the
/// running total stays within the budget, otherwise skip and keep going.
///
/// Deliberately not a knapsack: once a large high-priority activity has
/// consumed the remaining budget, a lower-priority activity that would fit
/// is still skipped, and nothing is back-filled after a skip. Later, smaller
/// activities are still tried against the same running total.
pub fn fit_to_budget(ordered: Vec<Activity>, budget_minutes: i32) -> FitResult {
    let mut cumulative = 0;
    let mut fitted = Vec::new();
    let mut skipped = Vec::new();

    for activity in ordered {
        if cumulative + activity.duration <= budget_minutes {
            cumulative += activity.duration;
            fitted.push(activity);
        } else {
            skipped.push(activity);
        }
    }

    FitResult { fitted, skipped }
}
