//! Free-time interval model.
//!
//! A `FreeInterval` is a contiguous span of free time supplied by the
//! availability source, already clipped to one scheduling horizon and
//! expressed in the same timeline as task deadlines.
//!
//! The allocator never mutates the caller's intervals; it consumes
//! capacity on private working copies.

use serde::{Deserialize, Serialize};

/// Milliseconds per minute.
pub(crate) const MINUTE_MS: i64 = 60_000;

/// A free-time interval [start, end).
///
/// Half-open: includes start, excludes end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeInterval {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl FreeInterval {
    /// Creates a new free interval.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this interval (ms). Negative for an inverted span.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Usable capacity in whole minutes. Zero-length and inverted spans
    /// have zero capacity.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.duration_ms() / MINUTE_MS).max(0)
    }

    /// Whether this interval has no usable span (`end <= start`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_ms <= self.start_ms
    }

    /// Whether a timestamp falls within this interval.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }
}
