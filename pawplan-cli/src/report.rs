//! Plain-text schedule and conflict reporting.

use pawplan_core::{Caregiver, DailyPlan, SchedulingConflict, Severity, SlotOutcome};

pub fn print_plan(owner: &Caregiver, plan: &DailyPlan, conflicts: &[SchedulingConflict]) {
    println!("Daily plan for {}", owner.name);
    println!(
        "Available: {} min | Scheduled: {} | Skipped: {} | Planned: {} min",
        owner.available_minutes,
        plan.scheduled.len(),
        plan.skipped.len(),
        plan.total_duration
    );
    println!();

    for (i, slot) in plan.scheduled.iter().enumerate() {
        let forced = match slot.outcome {
            SlotOutcome::Ok => "",
            SlotOutcome::ForcedUnmetDependency => " [unmet dependency]",
        };
        println!(
            "{:>2}. [{} - {}] p{} {} ({}) - {} min, {}{}",
            i + 1,
            slot.scheduled_time.format("%H:%M"),
            slot.end_time.format("%H:%M"),
            slot.activity.priority.level(),
            slot.activity.description,
            slot.activity.dependent,
            slot.activity.duration,
            slot.activity.category.label(),
            forced
        );
        if !slot.activity.dependencies.is_empty() {
            println!("      after: {}", slot.activity.dependencies.join(", "));
        }
    }

    if !plan.skipped.is_empty() {
        println!("\nSkipped (not enough time):");
        for activity in &plan.skipped {
            println!(
                "  - {} ({}) - {} min",
                activity.description, activity.dependent, activity.duration
            );
        }
    }

    print_conflicts(conflicts);

    println!("\nSummary by dependent:");
    for dependent in owner.dependents() {
        let slots = plan.tasks_for_dependent(&dependent.name);
        let minutes: i32 = slots.iter().map(|s| s.activity.duration).sum();
        println!(
            "  {} ({}): {} tasks, {} minutes",
            dependent.name,
            dependent.species,
            slots.len(),
            minutes
        );
    }
}

pub fn print_conflicts(conflicts: &[SchedulingConflict]) {
    if conflicts.is_empty() {
        return;
    }
    println!("\n{} conflict(s) detected:", conflicts.len());
    for conflict in conflicts {
        let tag = match conflict.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("  [{tag}] {}", conflict.description);
        for activity in &conflict.affected {
            println!("      - {} ({})", activity.description, activity.dependent);
        }
    }
}
