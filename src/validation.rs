//! Advisory input checks for planning inputs.
//!
//! Detects input hygiene issues a UI may want to surface before
//! planning:
//! - Duplicate task IDs
//! - Missing or non-positive estimates (the allocator defaults them to 30)
//! - Empty or inverted free intervals (the allocator skips them)
//!
//! The allocator itself never consults these checks — it is total and
//! degrades gracefully on all of the above. This module exists purely
//! so entry forms can warn early.

use std::collections::HashSet;

use crate::models::{FreeInterval, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID. The allocator schedules them
    /// independently, but UI state usually expects unique IDs.
    DuplicateId,
    /// A task's estimate is missing or non-positive and will be read
    /// as the 30-minute default.
    NonPositiveEstimate,
    /// A free interval has `end <= start` and contributes no capacity.
    EmptyInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates planning inputs.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. All estimates present and positive
/// 3. All free intervals have usable span
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// Findings are advisory: [`crate::allocator::allocate`] accepts the
/// same inputs unconditionally.
pub fn validate_input(tasks: &[Task], free: &[FreeInterval]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        match task.est_minutes {
            Some(m) if m > 0 => {}
            Some(m) => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveEstimate,
                format!("Task '{}' has non-positive estimate {m}", task.id),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveEstimate,
                format!("Task '{}' has no estimate", task.id),
            )),
        }
    }

    for (i, iv) in free.iter().enumerate() {
        if iv.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                format!(
                    "Interval #{i} [{}, {}) has no usable span",
                    iv.start_ms, iv.end_ms
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, est: i64) -> Task {
        Task::new(id, 0).with_est_minutes(est)
    }

    #[test]
    fn test_valid_input() {
        let tasks = vec![task("a", 30), task("b", 60)];
        let free = vec![FreeInterval::new(0, 60_000)];
        assert!(validate_input(&tasks, &free).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let tasks = vec![task("a", 30), task("a", 60)];
        let errors = validate_input(&tasks, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_estimate() {
        let tasks = vec![task("a", 0), Task::new("b", 0)];
        let errors = validate_input(&tasks, &[]).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveEstimate)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_empty_intervals() {
        let free = vec![
            FreeInterval::new(100, 100),
            FreeInterval::new(200, 100),
            FreeInterval::new(0, 60_000),
        ];
        let errors = validate_input(&[], &free).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::EmptyInterval)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_all_findings_accumulate() {
        let tasks = vec![task("a", -5), task("a", 30)];
        let free = vec![FreeInterval::new(10, 10)];
        let errors = validate_input(&tasks, &free).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
