//! ICS calendar export.
//!
//! Renders a plan's work sessions, plus deadline marker events for the
//! source tasks, as an RFC 5545 `VCALENDAR`. Timestamps are interpreted
//! as milliseconds since the Unix epoch and emitted in UTC.
//!
//! Sessions export as `Homework: {title}`; each deadline exports as a
//! 30-minute `DUE: {title}` marker event starting at the due instant.
//! Events with timestamps outside chrono's representable range are
//! dropped rather than failing the whole export.

use chrono::{DateTime, Utc};

use crate::models::{Session, Task};

/// Length of a deadline marker event (ms).
const DUE_MARKER_MS: i64 = 30 * 60_000;

/// Renders sessions and deadline markers as an ICS calendar string.
///
/// Output is deterministic for identical input: event UIDs derive from
/// the task id and start time, and lines use CRLF endings as RFC 5545
/// requires.
pub fn to_ics(sessions: &[Session], deadlines: &[Task]) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, "PRODID:-//homework-planner//EN");
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for s in sessions {
        push_event(
            &mut out,
            &format!("{}-{}", s.task_id, s.start_ms),
            &format!("Homework: {}", s.title),
            s.start_ms,
            s.end_ms,
        );
    }

    for t in deadlines {
        push_event(
            &mut out,
            &format!("{}-due", t.id),
            &format!("DUE: {}", t.title),
            t.due_at_ms,
            t.due_at_ms + DUE_MARKER_MS,
        );
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, uid: &str, summary: &str, start_ms: i64, end_ms: i64) {
    let (Some(start), Some(end)) = (format_utc(start_ms), format_utc(end_ms)) else {
        return;
    };

    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:{}@homework-planner", escape_text(uid)));
    push_line(out, &format!("DTSTAMP:{start}"));
    push_line(out, &format!("DTSTART:{start}"));
    push_line(out, &format!("DTEND:{end}"));
    push_line(out, &format!("SUMMARY:{}", escape_text(summary)));
    push_line(out, "STATUS:CONFIRMED");
    push_line(out, "END:VEVENT");
}

/// Formats epoch milliseconds as an ICS UTC timestamp (`YYYYMMDDTHHMMSSZ`).
fn format_utc(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|d| d.format("%Y%m%dT%H%M%SZ").to_string())
}

/// Escapes TEXT values per RFC 5545 §3.3.11.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}
