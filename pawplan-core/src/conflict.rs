//! Conflict detection: advisory diagnostics over a candidate activity set
//! (pre-check) and over an assigned schedule (post-check).
//!
//! Conflicts never block plan generation and are never raised as errors;
//! they are returned as tagged values for the caller to surface.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::plan::ScheduledTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    CircularDependency,
    ImpossibleDeadline,
    InsufficientTime,
    DuplicateTasks,
    TimeOverlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConflict {
    pub kind: ConflictKind,
    pub description: String,
    /// Detached copies of the activities involved.
    pub affected: Vec<Activity>,
    pub severity: Severity,
}

/// Pre-check a candidate activity set. Never fails, never mutates.
///
/// Emission order: circular dependency, impossible deadlines, insufficient
/// total time, duplicate descriptions.
pub fn detect_conflicts(
    activities: &[Activity],
    start: DateTime<Utc>,
    budget_minutes: i32,
) -> Vec<SchedulingConflict> {
    let mut conflicts = Vec::new();

    if let Some(path) = first_cycle(activities) {
        let members: HashSet<&str> = path.iter().map(String::as_str).collect();
        let affected: Vec<Activity> = {
            let mut seen = HashSet::new();
            activities
                .iter()
                .filter(|a| members.contains(a.description.as_str()))
                .filter(|a| seen.insert(a.description.clone()))
                .cloned()
                .collect()
        };
        conflicts.push(SchedulingConflict {
            kind: ConflictKind::CircularDependency,
            description: format!("Circular dependency detected: {}", path.join(" -> ")),
            affected,
            severity: Severity::Error,
        });
    }

    for activity in activities {
        let minutes_until_due = (activity.due_time - start).num_minutes();
        if i64::from(activity.duration) > minutes_until_due {
            conflicts.push(SchedulingConflict {
                kind: ConflictKind::ImpossibleDeadline,
                description: format!(
                    "'{}' needs {} minutes but is due in {} minutes",
                    activity.description, activity.duration, minutes_until_due
                ),
                affected: vec![activity.clone()],
                severity: Severity::Warning,
            });
        }
    }

    let total: i32 = activities.iter().map(|a| a.duration).sum();
    if total > budget_minutes {
        conflicts.push(SchedulingConflict {
            kind: ConflictKind::InsufficientTime,
            description: format!(
                "Pending activities need {total} minutes but only {budget_minutes} are available"
            ),
            affected: activities.to_vec(),
            severity: Severity::Warning,
        });
    }

    conflicts.extend(duplicate_descriptions(activities));
    conflicts
}

/// First dependency cycle found by depth-first search, as an ordered
/// description path ending on the repeated node (`A -> B -> A`).
///
/// The outer loop visits every unvisited node so disconnected components are
/// not skipped, but only the first cycle found in traversal order is
/// reported per run. Multiple independent cycles surface one at a time
/// across successive runs as earlier ones are fixed.
fn first_cycle(activities: &[Activity]) -> Option<Vec<String>> {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    for activity in activities {
        let edges = graph.entry(activity.description.as_str()).or_default();
        for dep in &activity.dependencies {
            edges.push(dep.as_str());
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();

    for activity in activities {
        let node = activity.description.as_str();
        if !visited.contains(node) {
            if let Some(path) = dfs(node, &graph, &mut visited, &mut stack) {
                return Some(path);
            }
        }
    }
    None
}

fn dfs<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    stack.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &next in neighbors {
            // Back edge: the neighbor is already on the recursion stack.
            if let Some(pos) = stack.iter().position(|&n| n == next) {
                let mut path: Vec<String> = stack[pos..].iter().map(|s| s.to_string()).collect();
                path.push(next.to_string());
                return Some(path);
            }
            if !visited.contains(next) {
                if let Some(path) = dfs(next, graph, visited, stack) {
                    return Some(path);
                }
            }
        }
    }

    stack.pop();
    None
}

/// One conflict per description that occurs more than once, listing every
/// instance as affected.
fn duplicate_descriptions(activities: &[Activity]) -> Vec<SchedulingConflict> {
    let mut order: Vec<&str> = Vec::new();
    let mut instances: HashMap<&str, Vec<&Activity>> = HashMap::new();
    for activity in activities {
        let entry = instances.entry(activity.description.as_str()).or_default();
        if entry.is_empty() {
            order.push(activity.description.as_str());
        }
        entry.push(activity);
    }

    let mut conflicts = Vec::new();
    for description in order {
        let found = &instances[description];
        if found.len() > 1 {
            conflicts.push(SchedulingConflict {
                kind: ConflictKind::DuplicateTasks,
                description: format!(
                    "'{}' appears {} times in the pending set",
                    description,
                    found.len()
                ),
                affected: found.iter().map(|a| (*a).clone()).collect(),
                severity: Severity::Warning,
            });
        }
    }
    conflicts
}

/// Post-check the assigned schedule for residual time collisions.
///
/// Quadratic over all unordered pairs, which is fine: schedules are bounded
/// by the daily time budget. On the non-fallback path the assigner places
/// slots back-to-back, so this is defensive and should report nothing.
pub fn detect_overlaps(scheduled: &[ScheduledTask]) -> Vec<SchedulingConflict> {
    let mut conflicts = Vec::new();

    for i in 0..scheduled.len() {
        for j in (i + 1)..scheduled.len() {
            let a = &scheduled[i];
            let b = &scheduled[j];
            if a.scheduled_time < b.end_time && b.scheduled_time < a.end_time {
                let shape = if a.scheduled_time == b.scheduled_time {
                    "start at the exact same time"
                } else {
                    "partially overlap"
                };
                let scope = if a.activity.dependent == b.activity.dependent {
                    "same dependent"
                } else {
                    "different dependents"
                };
                conflicts.push(SchedulingConflict {
                    kind: ConflictKind::TimeOverlap,
                    description: format!(
                        "'{}' and '{}' {} ({})",
                        a.activity.description, b.activity.description, shape, scope
                    ),
                    affected: vec![a.activity.clone(), b.activity.clone()],
                    severity: Severity::Warning,
                });
            }
        }
    }
    conflicts
}
