//! Plan (allocation result) model.
//!
//! A plan is the complete output of one allocation run: the work sessions
//! placed into free time, plus the remainders that could not be placed
//! before their deadlines. Remainders are advisory, not errors.

use serde::{Deserialize, Serialize};

use super::interval::MINUTE_MS;
use super::Task;

/// Result of one allocation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    /// Scheduled work sessions, in the order they were placed.
    pub sessions: Vec<Session>,
    /// Tasks (or parts of tasks) that did not fit before their deadline.
    pub unscheduled: Vec<Unscheduled>,
}

/// A scheduled block of work on one task.
///
/// A task split across several free intervals produces several sessions
/// sharing the same `task_id`. Sessions drawn from the same interval
/// never overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Source task ID.
    pub task_id: String,
    /// Task title (copied for calendar display).
    pub title: String,
    /// Task subject (copied for calendar display).
    pub subject: String,
    /// Session start (ms, inclusive).
    pub start_ms: i64,
    /// Session end (ms, exclusive). Never past the task's deadline.
    pub end_ms: i64,
    /// Entry marker distinguishing scheduled work from other calendar entries.
    pub kind: SessionKind,
}

/// Calendar entry classification for plan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// A scheduled homework work block.
    Work,
}

/// The unplaced portion of a task.
///
/// Carries all task fields plus the outstanding minutes, so warning
/// surfaces can render it without a task lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unscheduled {
    /// The source task.
    #[serde(flatten)]
    pub task: Task,
    /// Minutes of the estimate that could not be placed. Always positive.
    pub minutes_left: i64,
}

impl Session {
    /// Session duration in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_ms - self.start_ms) / MINUTE_MS
    }
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether nothing was scheduled and nothing was left over.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.unscheduled.is_empty()
    }

    /// All sessions belonging to a task, in placement order.
    pub fn sessions_for_task(&self, task_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.task_id == task_id)
            .collect()
    }

    /// Total minutes scheduled for a task across all its sessions.
    pub fn scheduled_minutes_for(&self, task_id: &str) -> i64 {
        self.sessions_for_task(task_id)
            .iter()
            .map(|s| s.duration_minutes())
            .sum()
    }

    /// Whether a task received its full estimate (no remainder recorded).
    pub fn is_fully_scheduled(&self, task_id: &str) -> bool {
        !self.unscheduled.iter().any(|u| u.task.id == task_id)
    }

    /// Total scheduled minutes across all sessions.
    pub fn total_scheduled_minutes(&self) -> i64 {
        self.sessions.iter().map(|s| s.duration_minutes()).sum()
    }

    /// Total minutes left unplaced across all remainders.
    pub fn total_unscheduled_minutes(&self) -> i64 {
        self.unscheduled.iter().map(|u| u.minutes_left).sum()
    }

    /// Latest session end (ms), or `None` for a plan with no sessions.
    pub fn last_session_end_ms(&self) -> Option<i64> {
        self.sessions.iter().map(|s| s.end_ms).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn session(task_id: &str, start_min: i64, end_min: i64) -> Session {
        Session {
            task_id: task_id.into(),
            title: String::new(),
            subject: String::new(),
            start_ms: start_min * MINUTE_MS,
            end_ms: end_min * MINUTE_MS,
            kind: SessionKind::Work,
        }
    }

    fn sample_plan() -> Plan {
        let mut p = Plan::new();
        p.sessions.push(session("hw1", 0, 60));
        p.sessions.push(session("hw1", 120, 150));
        p.sessions.push(session("hw2", 60, 120));
        p.unscheduled.push(Unscheduled {
            task: Task::new("hw3", 0)
                .with_est_minutes(45)
                .with_priority(Priority::Low),
            minutes_left: 45,
        });
        p
    }

    #[test]
    fn test_plan_queries() {
        let p = sample_plan();
        assert_eq!(p.session_count(), 3);
        assert_eq!(p.sessions_for_task("hw1").len(), 2);
        assert_eq!(p.scheduled_minutes_for("hw1"), 90);
        assert_eq!(p.scheduled_minutes_for("hw2"), 60);
        assert_eq!(p.scheduled_minutes_for("hw9"), 0);
    }

    #[test]
    fn test_plan_totals() {
        let p = sample_plan();
        assert_eq!(p.total_scheduled_minutes(), 150);
        assert_eq!(p.total_unscheduled_minutes(), 45);
        assert_eq!(p.last_session_end_ms(), Some(150 * MINUTE_MS));
    }

    #[test]
    fn test_fully_scheduled() {
        let p = sample_plan();
        assert!(p.is_fully_scheduled("hw1"));
        assert!(!p.is_fully_scheduled("hw3"));
    }

    #[test]
    fn test_empty_plan() {
        let p = Plan::new();
        assert!(p.is_empty());
        assert_eq!(p.total_scheduled_minutes(), 0);
        assert_eq!(p.last_session_end_ms(), None);
    }

    #[test]
    fn test_unscheduled_serde_flattens_task() {
        let u = Unscheduled {
            task: Task::new("hw3", 99).with_title("Reading log"),
            minutes_left: 20,
        };
        let json = serde_json::to_value(&u).unwrap();
        // Task fields sit alongside minutes_left, not nested
        assert_eq!(json["id"], "hw3");
        assert_eq!(json["minutes_left"], 20);
    }
}
