//! Greedy allocation and plan quality metrics.
//!
//! # Algorithm
//!
//! `allocate` packs tasks into free intervals with an
//! earliest-deadline-first, priority-tie-broken, first-fit policy. It is
//! deliberately greedy and non-optimal: earlier-deadline and
//! higher-priority tasks get first claim on scarce capacity, and a task
//! splits across intervals when no single interval can hold it.
//!
//! # KPI
//!
//! `PlanKpi` summarizes a plan: scheduled and unplaced minutes,
//! completion rate, per-subject totals, and free-time utilization.

mod greedy;
mod kpi;

pub use greedy::allocate;
pub use kpi::PlanKpi;
