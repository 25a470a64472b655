//! Planning domain models.
//!
//! Core data types for the homework planner: inputs (`Task`,
//! `FreeInterval`, `WeeklyTask`) and outputs (`Plan`, `Session`,
//! `Unscheduled`). All types serialize with serde so UI layers can
//! persist and restore them directly.

mod interval;
mod plan;
mod task;
mod weekly;

pub(crate) use interval::MINUTE_MS;
pub use interval::FreeInterval;
pub use plan::{Plan, Session, SessionKind, Unscheduled};
pub use task::{Priority, Task, DEFAULT_EST_MINUTES};
pub use weekly::WeeklyTask;
