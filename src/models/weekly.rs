//! Recurring weekly task template.
//!
//! A `WeeklyTask` describes homework that recurs every week (e.g. "Maths
//! practice, due Tuesday 11:30"). Instantiating it against a week start
//! yields a concrete [`Task`] for that week, with a deadline computed from
//! the weekday and due time.
//!
//! # Week Convention
//! `weekday` is 1 = Monday … 7 = Sunday, and `week_start_ms` is expected to
//! be the Monday 00:00 of the target week in the consumer's timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interval::MINUTE_MS;
use super::{Priority, Task};

const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// A weekly recurring task template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTask {
    /// Template identifier. Instances append the week-start date.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Subject label.
    pub subject: String,
    /// Due weekday: 1 = Monday … 7 = Sunday.
    pub weekday: u8,
    /// Due hour of day (0-23).
    #[serde(default = "default_due_hour")]
    pub due_hour: u8,
    /// Due minute (0-59).
    #[serde(default)]
    pub due_minute: u8,
    /// Estimated work required (minutes).
    #[serde(default)]
    pub est_minutes: Option<i64>,
    /// Tie-break priority.
    #[serde(default)]
    pub priority: Option<Priority>,
}

fn default_due_hour() -> u8 {
    17
}

impl WeeklyTask {
    /// Creates a new weekly template due on the given weekday at 17:00.
    pub fn new(id: impl Into<String>, weekday: u8) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            subject: String::new(),
            weekday,
            due_hour: default_due_hour(),
            due_minute: 0,
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

    /// Sets the due time of day.
    pub fn with_due_time(mut self, hour: u8, minute: u8) -> Self {
        self.due_hour = hour;
        self.due_minute = minute;
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

    /// Deadline of this template within the week starting at `week_start_ms`
    /// (Monday 00:00).
    pub fn due_at_ms(&self, week_start_ms: i64) -> i64 {
        week_start_ms
            + i64::from(self.weekday.saturating_sub(1)) * DAY_MS
            + i64::from(self.due_hour) * HOUR_MS
            + i64::from(self.due_minute) * MINUTE_MS
    }

    /// Instantiates a concrete task for the week starting at `week_start_ms`.
    ///
    /// The instance id is `"{template id}-{week start date}"` so the same
    /// template yields distinct task ids across weeks. `week_start_ms` is
    /// interpreted as milliseconds since the Unix epoch (UTC) for the date
    /// stamp; out-of-range values fall back to the raw millisecond value.
    pub fn instantiate(&self, week_start_ms: i64) -> Task {
        let stamp = DateTime::<Utc>::from_timestamp_millis(week_start_ms)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| week_start_ms.to_string());

        Task {
            id: format!("{}-{}", self.id, stamp),
            title: self.title.clone(),
            subject: self.subject.clone(),
            due_at_ms: self.due_at_ms(week_start_ms),
            est_minutes: self.est_minutes,
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Monday 2025-09-01 00:00:00 UTC
    const WEEK_START: i64 = 1_756_684_800_000;

    #[test]
    fn test_due_at_offsets() {
        // Tuesday 11:30
        let t = WeeklyTask::new("sparx", 2).with_due_time(11, 30);
        let expected = WEEK_START + DAY_MS + 11 * HOUR_MS + 30 * MINUTE_MS;
        assert_eq!(t.due_at_ms(WEEK_START), expected);
    }

    #[test]
    fn test_due_at_default_time() {
        // Monday default 17:00
        let t = WeeklyTask::new("mastery", 1);
        assert_eq!(t.due_at_ms(WEEK_START), WEEK_START + 17 * HOUR_MS);
    }

    #[test]
    fn test_instantiate() {
        let template = WeeklyTask::new("reader", 4)
            .with_title("Reading points")
            .with_subject("Reading")
            .with_due_time(11, 30)
            .with_est_minutes(40)
            .with_priority(Priority::Medium);

        let task = template.instantiate(WEEK_START);
        assert_eq!(task.id, "reader-2025-09-01");
        assert_eq!(task.title, "Reading points");
        assert_eq!(task.subject, "Reading");
        assert_eq!(task.est_minutes, Some(40));
        assert_eq!(task.priority, Some(Priority::Medium));
        assert_eq!(task.due_at_ms, template.due_at_ms(WEEK_START));
    }

    #[test]
    fn test_instances_distinct_across_weeks() {
        let template = WeeklyTask::new("mastery", 1);
        let a = template.instantiate(WEEK_START);
        let b = template.instantiate(WEEK_START + 7 * DAY_MS);
        assert_ne!(a.id, b.id);
        assert_eq!(b.due_at_ms - a.due_at_ms, 7 * DAY_MS);
    }

    #[test]
    fn test_serde_defaults() {
        let t: WeeklyTask = serde_json::from_str(
            r#"{"id":"w1","title":"","subject":"","weekday":3}"#,
        )
        .unwrap();
        assert_eq!(t.due_hour, 17);
        assert_eq!(t.due_minute, 0);
        assert_eq!(t.est_minutes, None);
    }
}
