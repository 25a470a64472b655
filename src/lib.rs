//! Homework planning core.
//!
//! Assigns homework tasks — each with a deadline, estimated duration, and
//! priority — into caller-supplied free-time blocks, producing work sessions
//! that respect block capacity and task deadlines. Tasks that cannot be fully
//! placed before their deadline come back as unscheduled remainders, a normal
//! advisory outcome rather than an error.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Priority`, `FreeInterval`,
//!   `Plan`, `Session`, `Unscheduled`, `WeeklyTask`
//! - **`allocator`**: The allocation algorithm (`allocate`) and plan
//!   quality metrics (`PlanKpi`)
//! - **`export`**: ICS calendar export of sessions and deadline markers
//! - **`validation`**: Advisory input integrity checks for UI surfaces
//!
//! # Time Representation
//!
//! All times are `i64` milliseconds relative to an epoch the consumer
//! defines. The allocator only compares and subtracts timestamps; `export`
//! and `models::WeeklyTask` additionally interpret them as milliseconds
//! since the Unix epoch (UTC) to render calendar dates.
//!
//! # Design
//!
//! The allocator is a pure function: earliest-deadline-first with a priority
//! tie-break, first-fit capacity consumption, splitting a task across blocks
//! when needed. It is deliberately not an optimal packer; the greedy order
//! is the product policy.

pub mod allocator;
pub mod export;
pub mod models;
pub mod validation;
