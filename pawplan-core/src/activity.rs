//! Activity model for the PawPlan care scheduler.
//!
//! An activity is one unit of care work for a dependent: feeding, walking,
//! medication and so on. Activities carry everything the planner needs —
//! duration, priority, due time, dependency descriptions, recurrence.

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, 1 = highest. Sorts High before Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    /// Parse a numeric priority level. Anything outside 1..=3 fails fast.
    pub fn from_level(level: i32) -> Result<Self> {
        match level {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            _ => bail!("priority must be between 1 and 3, got {level}"),
        }
    }

    pub fn level(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Priority {
    type Error = anyhow::Error;

    fn try_from(level: i32) -> Result<Self> {
        Priority::from_level(level)
    }
}

impl From<Priority> for i32 {
    fn from(p: Priority) -> i32 {
        p.level()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feeding,
    Walking,
    Grooming,
    Medication,
    Playtime,
    Training,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Feeding => "feeding",
            Category::Walking => "walking",
            Category::Grooming => "grooming",
            Category::Medication => "medication",
            Category::Playtime => "playtime",
            Category::Training => "training",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Step between occurrences. Monthly is a fixed 30-day step, not
    /// calendar-month aware.
    fn step(self) -> Option<Duration> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some(Duration::days(1)),
            Recurrence::Weekly => Some(Duration::days(7)),
            Recurrence::Monthly => Some(Duration::days(30)),
        }
    }
}

/// One unit of care work.
///
/// `id` is the structural key the planner uses for dependency bookkeeping;
/// `description` is the human-facing label that dependencies are authored
/// against. Keeping the two apart means legitimately duplicate descriptions
/// don't corrupt the dependency ledger (duplicates are still reported by the
/// conflict detector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub description: String,

    /// Minutes.
    pub duration: i32,
    pub priority: Priority,
    pub due_time: DateTime<Utc>,
    pub category: Category,

    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// Name of the dependent this activity is for. Supplied via the builder
    /// (or filled in when the activity is attached) and never rewritten.
    #[serde(default)]
    pub dependent: String,

    /// Descriptions of activities that must be completed first.
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub recurrence_end: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        duration: i32,
        priority: Priority,
        due_time: DateTime<Utc>,
        category: Category,
    ) -> Result<Self> {
        if duration <= 0 {
            bail!("activity duration must be positive, got {duration} minutes");
        }
        Ok(Self {
            id: id.into(),
            description: description.into(),
            duration,
            priority,
            due_time,
            category,
            completed: false,
            completed_at: None,
            dependent: String::new(),
            dependencies: Vec::new(),
            recurrence: Recurrence::None,
            recurrence_end: None,
        })
    }

    pub fn for_dependent(mut self, name: impl Into<String>) -> Self {
        self.dependent = name.into();
        self
    }

    pub fn with_dependency(mut self, description: impl Into<String>) -> Self {
        self.dependencies.push(description.into());
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_recurrence_end(mut self, end: DateTime<Utc>) -> Self {
        self.recurrence_end = Some(end);
        self
    }

    pub fn mark_complete(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(now);
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_time < now
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence != Recurrence::None
    }

    /// Next occurrence of a recurring activity: a full copy with the due time
    /// stepped forward and completion state reset. Returns `None` for
    /// non-recurring activities or when the next due time would pass
    /// `recurrence_end`. The original is never touched.
    pub fn next_occurrence(&self) -> Option<Activity> {
        let step = self.recurrence.step()?;
        let next_due = self.due_time + step;
        if let Some(end) = self.recurrence_end {
            if next_due > end {
                return None;
            }
        }
        let mut next = self.clone();
        next.due_time = next_due;
        next.completed = false;
        next.completed_at = None;
        Some(next)
    }
}

/// Combinable criteria for roster queries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub dependent: Option<String>,
    pub completed: Option<bool>,
    pub category: Option<Category>,
    pub overdue_only: bool,
}

impl ActivityFilter {
    pub fn for_dependent(mut self, name: impl Into<String>) -> Self {
        self.dependent = Some(name.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn overdue_only(mut self) -> Self {
        self.overdue_only = true;
        self
    }

    pub fn matches(&self, activity: &Activity, now: DateTime<Utc>) -> bool {
        if let Some(name) = &self.dependent {
            if &activity.dependent != name {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if activity.completed != completed {
                return false;
            }
        }
        if let Some(category) = self.category {
            if activity.category != category {
                return false;
            }
        }
        if self.overdue_only && !activity.is_overdue(now) {
            return false;
        }
        true
    }
}
