//! Plan quality metrics.
//!
//! Summarizes an allocation result for dashboards and warning surfaces.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled Minutes | Sum of session durations |
//! | Unscheduled Minutes | Sum of remainder minutes |
//! | Completion Rate | scheduled / (scheduled + unscheduled) |
//! | Fully Scheduled | Tasks with no remainder |
//! | Minutes by Subject | Scheduled minutes grouped by subject |
//! | Free Utilization | scheduled / total free capacity |

use std::collections::HashMap;

use crate::models::{FreeInterval, Plan};

/// Plan performance indicators.
///
/// All time values are in minutes.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Total minutes placed into sessions.
    pub scheduled_minutes: i64,
    /// Total minutes that did not fit before their deadlines.
    pub unscheduled_minutes: i64,
    /// Number of tasks that received their full estimate.
    pub fully_scheduled_count: usize,
    /// Number of tasks with a remainder.
    pub unscheduled_count: usize,
    /// Fraction of requested work that was placed (0.0..1.0).
    pub completion_rate: f64,
    /// Scheduled minutes per subject.
    pub minutes_by_subject: HashMap<String, i64>,
    /// Fraction of free capacity consumed (0.0..1.0), against the
    /// original intervals.
    pub free_utilization: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the free intervals it was built from.
    pub fn calculate(plan: &Plan, free: &[FreeInterval]) -> Self {
        let scheduled_minutes = plan.total_scheduled_minutes();
        let unscheduled_minutes = plan.total_unscheduled_minutes();

        // Distinct task ids with at least one session and no remainder
        let mut fully: Vec<&str> = plan
            .sessions
            .iter()
            .map(|s| s.task_id.as_str())
            .filter(|id| plan.is_fully_scheduled(id))
            .collect();
        fully.sort_unstable();
        fully.dedup();

        let mut minutes_by_subject: HashMap<String, i64> = HashMap::new();
        for s in &plan.sessions {
            *minutes_by_subject.entry(s.subject.clone()).or_insert(0) +=
                s.duration_minutes();
        }

        let requested = scheduled_minutes + unscheduled_minutes;
        let completion_rate = if requested == 0 {
            1.0
        } else {
            scheduled_minutes as f64 / requested as f64
        };

        let capacity: i64 = free.iter().map(|iv| iv.duration_minutes()).sum();
        let free_utilization = if capacity <= 0 {
            0.0
        } else {
            scheduled_minutes as f64 / capacity as f64
        };

        Self {
            scheduled_minutes,
            unscheduled_minutes,
            fully_scheduled_count: fully.len(),
            unscheduled_count: plan.unscheduled.len(),
            completion_rate,
            minutes_by_subject,
            free_utilization,
        }
    }
}
