//! Homework task model.
//!
//! A task is a single unit of homework with a hard deadline, an estimated
//! duration in minutes, and a priority used to break ties between tasks
//! due at the same time.

use serde::{Deserialize, Deserializer, Serialize};

/// Substitute estimate (minutes) for a missing or non-positive `est_minutes`.
pub const DEFAULT_EST_MINUTES: i64 = 30;

/// Scheduling priority.
///
/// Used only as a tie-break between tasks with the same deadline.
/// Lower rank = scheduled earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Ordering rank: high = 0, medium = 1, low = 2.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Parses a priority label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("high") {
            Some(Priority::High)
        } else if label.eq_ignore_ascii_case("medium") {
            Some(Priority::Medium)
        } else if label.eq_ignore_ascii_case("low") {
            Some(Priority::Low)
        } else {
            None
        }
    }
}

/// A homework task to be allocated into free time.
///
/// Immutable for the duration of one allocation run. `title` and `subject`
/// are opaque to the algorithm; only `due_at_ms`, `est_minutes`, and
/// `priority` influence placement.
///
/// # Time Representation
/// `due_at_ms` is in milliseconds relative to the consumer's epoch and must
/// be comparable with the free intervals handed to the allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (opaque; duplicates are scheduled independently).
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Subject label (for grouping and calendar colouring).
    pub subject: String,
    /// Hard deadline (ms). No work is scheduled at or past this instant.
    pub due_at_ms: i64,
    /// Estimated work required (minutes). `None` or non-positive values
    /// fall back to [`DEFAULT_EST_MINUTES`].
    #[serde(default)]
    pub est_minutes: Option<i64>,
    /// Tie-break priority. `None` (or an unrecognized label in serialized
    /// input) sorts after `Low`.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
}

impl Task {
    /// Creates a new task with the given ID and deadline.
    pub fn new(id: impl Into<String>, due_at_ms: i64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            subject: String::new(),
            due_at_ms,
            est_minutes: None,
            priority: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the estimated duration (minutes).
    pub fn with_est_minutes(mut self, minutes: i64) -> Self {
        self.est_minutes = Some(minutes);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Effective estimate (minutes), with the default substituted for a
    /// missing or non-positive value. Evaluated once per task before
    /// scheduling, never mid-run.
    pub fn effective_est_minutes(&self) -> i64 {
        match self.est_minutes {
            Some(m) if m > 0 => m,
            _ => DEFAULT_EST_MINUTES,
        }
    }

    /// Ordering rank of this task's priority; missing priority ranks
    /// after `Low`.
    #[inline]
    pub fn priority_rank(&self) -> u8 {
        self.priority.map_or(3, Priority::rank)
    }
}

/// Deserializes a priority field, mapping unknown labels to `None`
/// instead of failing.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Priority::from_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("hw1", 100_000)
            .with_title("Algebra sheet")
            .with_subject("Maths")
            .with_est_minutes(45)
            .with_priority(Priority::High);

        assert_eq!(task.id, "hw1");
        assert_eq!(task.title, "Algebra sheet");
        assert_eq!(task.subject, "Maths");
        assert_eq!(task.due_at_ms, 100_000);
        assert_eq!(task.est_minutes, Some(45));
        assert_eq!(task.priority, Some(Priority::High));
    }

    #[test]
    fn test_effective_estimate_default() {
        assert_eq!(Task::new("a", 0).effective_est_minutes(), 30);
        assert_eq!(
            Task::new("b", 0).with_est_minutes(0).effective_est_minutes(),
            30
        );
        assert_eq!(
            Task::new("c", 0).with_est_minutes(-5).effective_est_minutes(),
            30
        );
        assert_eq!(
            Task::new("d", 0).with_est_minutes(90).effective_est_minutes(),
            90
        );
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
        // Missing priority sorts after low
        let none = Task::new("x", 0);
        let low = Task::new("y", 0).with_priority(Priority::Low);
        assert!(low.priority_rank() < none.priority_rank());
    }

    #[test]
    fn test_priority_from_label() {
        assert_eq!(Priority::from_label("high"), Some(Priority::High));
        assert_eq!(Priority::from_label("MEDIUM"), Some(Priority::Medium));
        assert_eq!(Priority::from_label("urgent"), None);
    }

    #[test]
    fn test_lenient_priority_deserialization() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","title":"","subject":"","due_at_ms":0,"priority":"someday"}"#,
        )
        .unwrap();
        assert_eq!(task.priority, None);

        let task: Task = serde_json::from_str(
            r#"{"id":"t2","title":"","subject":"","due_at_ms":0,"priority":"low"}"#,
        )
        .unwrap();
        assert_eq!(task.priority, Some(Priority::Low));
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task::new("hw1", 42)
            .with_title("Essay")
            .with_subject("English")
            .with_est_minutes(60)
            .with_priority(Priority::Medium);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.est_minutes, Some(60));
        assert_eq!(back.priority, Some(Priority::Medium));
    }
}
