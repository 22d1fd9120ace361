//! End-to-end planning workflows over a full caregiver roster.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pawplan_core::{
    Activity, Caregiver, Category, ConflictKind, Dependent, Planner, Priority, Recurrence,
    Severity, SlotOutcome,
};

fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
}

fn task(
    id: &str,
    description: &str,
    duration: i32,
    priority: Priority,
    due_in_minutes: i64,
    category: Category,
) -> Activity {
    Activity::new(
        id,
        description,
        duration,
        priority,
        morning() + Duration::minutes(due_in_minutes),
        category,
    )
    .unwrap()
}

/// The conflict batch from the original suite: a two-task cycle, a task due
/// before it can finish, and a duplicated description, over a one-hour
/// budget.
#[test]
fn conflict_batch_over_tight_budget() {
    let mut owner = Caregiver::new("Test Owner", 60);
    let mut charlie = Dependent::new("Charlie", "dog");

    charlie
        .add_activity(task("t1", "Task A", 20, Priority::High, 120, Category::Other).with_dependency("Task B"))
        .unwrap();
    charlie
        .add_activity(task("t2", "Task B", 20, Priority::High, 120, Category::Other).with_dependency("Task A"))
        .unwrap();
    charlie
        .add_activity(task("t3", "Urgent Task", 120, Priority::High, 30, Category::Other))
        .unwrap();
    charlie
        .add_activity(task("t4", "Feed Dog", 15, Priority::High, 60, Category::Feeding))
        .unwrap();
    charlie
        .add_activity(task("t5", "Feed Dog", 15, Priority::High, 120, Category::Feeding))
        .unwrap();
    owner.add_dependent(charlie);

    let planner = Planner::new(owner.available_minutes);
    let conflicts = planner.detect_conflicts(&owner.pending_activities(), morning());

    let count = |kind: ConflictKind| conflicts.iter().filter(|c| c.kind == kind).count();
    assert_eq!(count(ConflictKind::CircularDependency), 1);
    assert_eq!(count(ConflictKind::ImpossibleDeadline), 1);
    assert_eq!(count(ConflictKind::InsufficientTime), 1);
    assert_eq!(count(ConflictKind::DuplicateTasks), 1);

    let cycle = conflicts
        .iter()
        .find(|c| c.kind == ConflictKind::CircularDependency)
        .unwrap();
    assert_eq!(cycle.severity, Severity::Error);

    let dupes = conflicts
        .iter()
        .find(|c| c.kind == ConflictKind::DuplicateTasks)
        .unwrap();
    assert_eq!(dupes.affected.len(), 2);
    assert_eq!(dupes.severity, Severity::Warning);
}

/// The showcase roster: out-of-order insertion, a feeding dependency, and a
/// same-due-time pair across two dependents. The plan sorts everything,
/// honors the dependency, and stays back-to-back from the start time.
#[test]
fn showcase_roster_plans_in_order() {
    let mut owner = Caregiver::new("Sarah", 360);
    let mut buddy = Dependent::new("Buddy", "Golden Retriever");
    let mut mittens = Dependent::new("Mittens", "Cat");

    buddy
        .add_activity(task("b1", "Playtime with Buddy", 30, Priority::Medium, 240, Category::Playtime))
        .unwrap();
    mittens
        .add_activity(task("m1", "Brush Mittens", 20, Priority::Medium, 180, Category::Grooming))
        .unwrap();
    buddy
        .add_activity(task("b2", "Feed Buddy breakfast", 15, Priority::High, 60, Category::Feeding))
        .unwrap();
    mittens
        .add_activity(task("m2", "Interactive play with Mittens", 25, Priority::Low, 300, Category::Playtime))
        .unwrap();
    mittens
        .add_activity(task("m3", "Feed Mittens", 10, Priority::High, 90, Category::Feeding))
        .unwrap();
    buddy
        .add_activity(
            task("b3", "Morning walk with Buddy", 45, Priority::High, 120, Category::Walking)
                .with_dependency("Feed Buddy breakfast"),
        )
        .unwrap();
    // Same due time, different dependents.
    buddy
        .add_activity(task("b4", "Training session with Buddy", 30, Priority::Medium, 360, Category::Training))
        .unwrap();
    mittens
        .add_activity(task("m4", "Give Mittens medication", 5, Priority::High, 360, Category::Medication))
        .unwrap();

    owner.add_dependent(buddy);
    owner.add_dependent(mittens);

    let mut planner = Planner::new(owner.available_minutes);
    let plan = planner.generate_daily_plan(&owner.pending_activities(), morning(), true);

    // Everything fits in six hours.
    assert_eq!(plan.scheduled.len(), 8);
    assert!(plan.skipped.is_empty());
    assert_eq!(plan.total_duration, 180);

    // High-priority feeding first; the walk never precedes its prerequisite.
    assert_eq!(plan.scheduled[0].activity.id, "b2");
    let position = |id: &str| plan.scheduled.iter().position(|s| s.activity.id == id).unwrap();
    assert!(position("b2") < position("b3"));

    // Contiguous non-overlapping slots from the start time.
    assert_eq!(plan.scheduled[0].scheduled_time, morning());
    for pair in plan.scheduled.windows(2) {
        assert_eq!(pair[0].end_time, pair[1].scheduled_time);
    }
    assert!(plan.scheduled.iter().all(|s| s.outcome == SlotOutcome::Ok));

    // Assigned slots never overlap, so the only findings are pre-check ones.
    assert!(
        !planner
            .conflicts()
            .iter()
            .any(|c| c.kind == ConflictKind::TimeOverlap)
    );

    // Display grouping by dependent covers the whole schedule.
    let buddy_slots = plan.tasks_for_dependent("Buddy");
    let mittens_slots = plan.tasks_for_dependent("Mittens");
    assert_eq!(buddy_slots.len() + mittens_slots.len(), plan.scheduled.len());
    assert_eq!(buddy_slots.len(), 4);
}

/// Mixed recurring and one-off tasks over a five-hour budget, then the
/// completion workflow regenerating a recurring task.
#[test]
fn recurring_tasks_complete_and_regenerate() {
    let mut owner = Caregiver::new("Pet Owner", 300);
    let mut rover = Dependent::new("Rover", "dog");
    let mut mittens = Dependent::new("Mittens", "cat");

    rover
        .add_activity(
            task("r1", "Morning Walk", 30, Priority::High, 60, Category::Walking)
                .with_recurrence(Recurrence::Daily),
        )
        .unwrap();
    rover
        .add_activity(
            task("r2", "Feed Rover", 15, Priority::High, 30, Category::Feeding)
                .with_recurrence(Recurrence::Daily),
        )
        .unwrap();
    mittens
        .add_activity(
            task("m1", "Feed Mittens", 10, Priority::High, 30, Category::Feeding)
                .with_recurrence(Recurrence::Daily),
        )
        .unwrap();
    mittens
        .add_activity(task("m2", "Grooming", 45, Priority::Medium, 180, Category::Grooming))
        .unwrap();
    mittens
        .add_activity(task("m3", "Playtime", 20, Priority::Medium, 120, Category::Playtime))
        .unwrap();

    owner.add_dependent(rover);
    owner.add_dependent(mittens);

    assert_eq!(owner.recurring_activities().len(), 3);

    let mut planner = Planner::new(owner.available_minutes);
    let plan = planner.generate_daily_plan(&owner.pending_activities(), morning(), true);
    assert_eq!(plan.scheduled.len(), 5);
    assert!(plan.skipped.is_empty());
    assert_eq!(plan.total_duration, 120);

    // Complete the recurring walk: a fresh copy lands a day later.
    let rover = owner.dependent_mut("Rover").unwrap();
    let next = rover.complete_activity("Morning Walk", morning()).unwrap();
    assert_eq!(next.due_time, morning() + Duration::minutes(60) + Duration::days(1));
    assert!(!next.completed);

    // The next run sees the regenerated copy instead of the completed one.
    let pending = owner.pending_activities();
    assert_eq!(pending.len(), 5);
    let plan = planner.generate_daily_plan(&pending, morning(), true);
    assert_eq!(plan.scheduled.len(), 5);
}

/// Budget pressure: the fitter's greedy, non-backfilling order decides who
/// gets skipped, and the skip list survives into the plan.
#[test]
fn tight_budget_skips_by_priority_order() {
    let mut owner = Caregiver::new("Busy Owner", 60);
    let mut buddy = Dependent::new("Buddy", "dog");

    buddy
        .add_activity(task("a", "Long vet visit", 40, Priority::High, 120, Category::Other))
        .unwrap();
    buddy
        .add_activity(task("b", "Walk", 30, Priority::Medium, 120, Category::Walking))
        .unwrap();
    buddy
        .add_activity(task("c", "Play", 20, Priority::Low, 120, Category::Playtime))
        .unwrap();
    owner.add_dependent(buddy);

    let mut planner = Planner::new(owner.available_minutes);
    let plan = planner.generate_daily_plan(&owner.pending_activities(), morning(), true);

    let scheduled: Vec<&str> = plan.scheduled.iter().map(|s| s.activity.id.as_str()).collect();
    let skipped: Vec<&str> = plan.skipped.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(scheduled, vec!["a", "c"]);
    assert_eq!(skipped, vec!["b"]);
    assert_eq!(plan.total_duration, 60);

    assert!(
        planner
            .conflicts()
            .iter()
            .any(|c| c.kind == ConflictKind::InsufficientTime)
    );
}
