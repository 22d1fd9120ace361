//! A dependent (a pet) and the activity collection it owns.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub name: String,
    pub species: String,
    activities: Vec<Activity>,
}

impl Dependent {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            activities: Vec::new(),
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Attach an activity. An activity built with an empty dependent key is
    /// stamped with this dependent's name; one built for a different
    /// dependent is rejected rather than silently rewritten.
    pub fn add_activity(&mut self, mut activity: Activity) -> Result<()> {
        if activity.dependent.is_empty() {
            activity.dependent = self.name.clone();
        } else if activity.dependent != self.name {
            bail!(
                "activity '{}' was built for dependent '{}', not '{}'",
                activity.description,
                activity.dependent,
                self.name
            );
        }
        self.activities.push(activity);
        Ok(())
    }

    pub fn remove_activity(&mut self, id: &str) -> Option<Activity> {
        let index = self.activities.iter().position(|a| a.id == id)?;
        Some(self.activities.remove(index))
    }

    pub fn pending(&self) -> Vec<Activity> {
        self.activities.iter().filter(|a| !a.completed).cloned().collect()
    }

    pub fn completed(&self) -> Vec<Activity> {
        self.activities.iter().filter(|a| a.completed).cloned().collect()
    }

    pub fn filter(&self, filter: &ActivityFilter, now: DateTime<Utc>) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| filter.matches(a, now))
            .cloned()
            .collect()
    }

    /// Complete the first pending activity matching `description`. When the
    /// activity recurs, the next occurrence is appended to this dependent's
    /// collection and returned. Returns `None` when nothing matched or the
    /// completed activity does not recur.
    ///
    /// Must not run concurrently with a planning pass over the same roster;
    /// callers serialize completion against planning.
    pub fn complete_activity(
        &mut self,
        description: &str,
        now: DateTime<Utc>,
    ) -> Option<Activity> {
        let index = self
            .activities
            .iter()
            .position(|a| a.description == description && !a.completed)?;
        self.activities[index].mark_complete(now);

        let next = self.activities[index].next_occurrence();
        if let Some(next) = &next {
            self.activities.push(next.clone());
        }
        next
    }
}
