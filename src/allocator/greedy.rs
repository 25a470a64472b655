//! Deadline-aware greedy interval packing.
//!
//! # Algorithm
//!
//! 1. Sort tasks by deadline, ties broken by priority rank.
//! 2. Sort a private working copy of the free intervals by start.
//! 3. For each task, consume interval capacity front-to-back, clipping
//!    the usable end of each interval to the task's deadline.
//! 4. Whatever estimate remains unplaced becomes one remainder.
//!
//! Capacity consumed for one task permanently shrinks the intervals
//! available to all later tasks in processing order. The function is
//! total: empty, zero-length, or deadline-inconsistent inputs degrade
//! to "less gets scheduled", never to an error.
//!
//! # Complexity
//! O(T log T + F log F + T·F) where T = tasks, F = free intervals.
//! Acceptable at the scale of one planning horizon; an interval tree
//! would not pay for itself here.

use crate::models::{FreeInterval, Plan, Session, SessionKind, Task, Unscheduled, MINUTE_MS};

/// Working copy of one free interval. `start_ms` advances as capacity
/// is consumed; the caller's `FreeInterval` values are never touched.
#[derive(Debug, Clone, Copy)]
struct Slot {
    start_ms: i64,
    end_ms: i64,
}

/// Allocates tasks into free intervals.
///
/// Processing order is ascending deadline, ties broken by priority
/// (high before medium before low, missing priority last); only those
/// two keys determine the order. Each task greedily consumes the
/// earliest remaining capacity that starts before its deadline, splitting
/// across intervals as needed. A task whose full estimate cannot be
/// placed yields exactly one [`Unscheduled`] remainder carrying the
/// outstanding minutes.
///
/// Duplicate task ids are scheduled independently. Intervals with
/// `end <= start` are skipped as zero-capacity. A missing or
/// non-positive estimate is read as 30 minutes.
///
/// # Example
///
/// ```
/// use homework_planner::allocator::allocate;
/// use homework_planner::models::{FreeInterval, Task};
///
/// const MIN: i64 = 60_000;
/// let tasks = vec![Task::new("hw1", 300 * MIN).with_est_minutes(90)];
/// let free = vec![
///     FreeInterval::new(0, 60 * MIN),
///     FreeInterval::new(120 * MIN, 180 * MIN),
/// ];
///
/// let plan = allocate(&tasks, &free);
/// assert_eq!(plan.session_count(), 2);
/// assert_eq!(plan.scheduled_minutes_for("hw1"), 90);
/// assert!(plan.unscheduled.is_empty());
/// ```
pub fn allocate(tasks: &[Task], free: &[FreeInterval]) -> Plan {
    // Processing order: earliest deadline first, priority as tie-break.
    // Stable sort, so full ties keep input order.
    let mut order: Vec<&Task> = tasks.iter().collect();
    order.sort_by(|a, b| {
        a.due_at_ms
            .cmp(&b.due_at_ms)
            .then_with(|| a.priority_rank().cmp(&b.priority_rank()))
    });

    // Private working copy, shared across the whole run: capacity used
    // by one task is gone for all later tasks.
    let mut slots: Vec<Slot> = free
        .iter()
        .map(|iv| Slot {
            start_ms: iv.start_ms,
            end_ms: iv.end_ms,
        })
        .collect();
    slots.sort_by_key(|s| s.start_ms);

    let mut plan = Plan::new();

    for task in order {
        let mut minutes_left = task.effective_est_minutes();

        for slot in slots.iter_mut() {
            // Too late to help this task. A slot starting exactly at the
            // deadline is unusable.
            if slot.start_ms >= task.due_at_ms {
                continue;
            }

            // Work must stop at the deadline even if the slot runs later.
            let usable_end_ms = slot.end_ms.min(task.due_at_ms);
            if usable_end_ms <= slot.start_ms {
                continue;
            }

            let available = (usable_end_ms - slot.start_ms) / MINUTE_MS;
            if available <= 0 {
                continue;
            }

            let use_minutes = minutes_left.min(available);
            let session_end_ms = slot.start_ms + use_minutes * MINUTE_MS;

            plan.sessions.push(Session {
                task_id: task.id.clone(),
                title: task.title.clone(),
                subject: task.subject.clone(),
                start_ms: slot.start_ms,
                end_ms: session_end_ms,
                kind: SessionKind::Work,
            });

            slot.start_ms = session_end_ms;
            minutes_left -= use_minutes;

            if minutes_left <= 0 {
                break;
            }
        }

        if minutes_left > 0 {
            plan.unscheduled.push(Unscheduled {
                task: task.clone(),
                minutes_left,
            });
        }
    }

    plan
}
