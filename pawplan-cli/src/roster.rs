//! TOML roster loading: caregiver settings, dependents, and their
//! activities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use pawplan_core::{Activity, Caregiver, Category, Dependent, Priority, Recurrence};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RosterFile {
    caregiver: CaregiverSpec,
    #[serde(default)]
    dependents: Vec<DependentSpec>,
}

#[derive(Debug, Deserialize)]
struct CaregiverSpec {
    name: String,
    #[serde(default = "default_available_minutes")]
    available_minutes: i32,
}

fn default_available_minutes() -> i32 {
    pawplan_core::DEFAULT_AVAILABLE_MINUTES
}

#[derive(Debug, Deserialize)]
struct DependentSpec {
    name: String,
    species: String,
    #[serde(default)]
    activities: Vec<ActivitySpec>,
}

#[derive(Debug, Deserialize)]
struct ActivitySpec {
    /// Optional stable key; generated from the dependent name when omitted.
    id: Option<String>,
    description: String,
    duration: i32,
    /// Numeric 1-3, validated on load.
    priority: i32,
    /// "YYYY-MM-DD HH:MM", UTC.
    due: String,
    category: Category,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    recurrence: Recurrence,
    recurrence_end: Option<String>,
}

pub fn load_roster(path: &Path) -> Result<Caregiver> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: RosterFile =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    build_caregiver(file)
}

fn build_caregiver(file: RosterFile) -> Result<Caregiver> {
    let mut owner = Caregiver::new(file.caregiver.name, file.caregiver.available_minutes);

    for spec in file.dependents {
        let mut dependent = Dependent::new(&spec.name, &spec.species);
        for (i, entry) in spec.activities.into_iter().enumerate() {
            let id = entry
                .id
                .unwrap_or_else(|| format!("{}-{:02}", slug(&spec.name), i + 1));
            let priority = Priority::from_level(entry.priority)
                .with_context(|| format!("activity '{}'", entry.description))?;
            let mut activity = Activity::new(
                id,
                &entry.description,
                entry.duration,
                priority,
                parse_datetime(&entry.due)?,
                entry.category,
            )
            .with_context(|| format!("activity '{}'", entry.description))?
            .for_dependent(&spec.name)
            .with_recurrence(entry.recurrence);
            for dep in entry.dependencies {
                activity = activity.with_dependency(dep);
            }
            if let Some(end) = entry.recurrence_end {
                activity = activity.with_recurrence_end(parse_datetime(&end)?);
            }
            dependent.add_activity(activity)?;
        }
        owner.add_dependent(dependent);
    }
    Ok(owner)
}

pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    let ndt = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .with_context(|| format!("invalid datetime '{value}', expected YYYY-MM-DD HH:MM"))?;
    Ok(ndt.and_utc())
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
