//! Caregiver: owns the dependents and exposes roster-wide accessors the
//! planner and any presentation layer read from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityFilter};
use crate::dependent::Dependent;

/// Default daily time budget: 8 hours.
pub const DEFAULT_AVAILABLE_MINUTES: i32 = 480;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caregiver {
    pub name: String,
    /// Daily time budget, minutes.
    pub available_minutes: i32,
    dependents: Vec<Dependent>,
}

impl Caregiver {
    pub fn new(name: impl Into<String>, available_minutes: i32) -> Self {
        Self {
            name: name.into(),
            available_minutes,
            dependents: Vec::new(),
        }
    }

    pub fn dependents(&self) -> &[Dependent] {
        &self.dependents
    }

    pub fn dependent_mut(&mut self, name: &str) -> Option<&mut Dependent> {
        self.dependents.iter_mut().find(|d| d.name == name)
    }

    pub fn add_dependent(&mut self, dependent: Dependent) {
        self.dependents.push(dependent);
    }

    pub fn remove_dependent(&mut self, name: &str) -> Option<Dependent> {
        let index = self.dependents.iter().position(|d| d.name == name)?;
        Some(self.dependents.remove(index))
    }

    pub fn set_available_minutes(&mut self, minutes: i32) {
        self.available_minutes = minutes;
    }

    pub fn all_activities(&self) -> Vec<Activity> {
        self.dependents
            .iter()
            .flat_map(|d| d.activities().iter().cloned())
            .collect()
    }

    /// The planning input: every pending activity across all dependents.
    pub fn pending_activities(&self) -> Vec<Activity> {
        self.dependents.iter().flat_map(|d| d.pending()).collect()
    }

    pub fn overdue_activities(&self, now: DateTime<Utc>) -> Vec<Activity> {
        self.filter_activities(&ActivityFilter::default().overdue_only(), now)
    }

    pub fn recurring_activities(&self) -> Vec<Activity> {
        self.all_activities()
            .into_iter()
            .filter(|a| a.is_recurring())
            .collect()
    }

    pub fn filter_activities(&self, filter: &ActivityFilter, now: DateTime<Utc>) -> Vec<Activity> {
        self.dependents
            .iter()
            .flat_map(|d| d.filter(filter, now))
            .collect()
    }
}

/// Stable sort by priority level (ascending = highest first).
pub fn sort_by_priority(activities: &[Activity], ascending: bool) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.priority);
    if !ascending {
        sorted.reverse();
    }
    sorted
}

/// Stable sort by due time (ascending = earliest first).
pub fn sort_by_due_time(activities: &[Activity], ascending: bool) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.due_time);
    if !ascending {
        sorted.reverse();
    }
    sorted
}

/// Stable sort by duration (descending = longest first, the display default).
pub fn sort_by_duration(activities: &[Activity], descending: bool) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.duration);
    if descending {
        sorted.reverse();
    }
    sorted
}

/// Stable sort by category label.
pub fn sort_by_category(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.category.label());
    sorted
}
