//! Derived-state computations over project values
//!
//! Pure functions: the current instant is always an explicit parameter, and
//! inputs are never mutated. Calling any of these twice with the same inputs
//! yields identical output.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::schemas::{Milestone, Project};

/// Parse an ISO 8601 instant, accepting either a full RFC 3339 timestamp or
/// a bare date (interpreted as midnight UTC).
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Check whether a milestone is overdue as of `now`.
///
/// Overdue means strictly past the due date with the work neither completed
/// nor covered by an uploaded progress report. A milestone due exactly at
/// `now` is not overdue. A due date that cannot be parsed is not overdue;
/// validation reports it separately.
pub fn milestone_is_overdue(milestone: &Milestone, now: DateTime<Utc>) -> bool {
    if milestone.is_completed() || milestone.progress_report_uploaded {
        return false;
    }
    match parse_instant(&milestone.due_date) {
        Some(due) => now > due,
        None => false,
    }
}

/// Return a copy of the project with every milestone's overdue flag
/// populated as of `now`.
///
/// Idempotent for a fixed `now`; the input is left untouched and the
/// update timestamp is not advanced, since nothing persisted changes.
pub fn annotate_overdue(project: &Project, now: DateTime<Utc>) -> Project {
    let milestones = project
        .milestones
        .iter()
        .map(|m| m.clone().with_overdue(milestone_is_overdue(m, now)))
        .collect();

    Project {
        milestones,
        ..project.clone()
    }
}

/// Percentage of milestones completed, 0-100.
///
/// An empty milestone list is 0% complete. Rounding is half-up.
pub fn calculate_progress(milestones: &[Milestone]) -> u8 {
    if milestones.is_empty() {
        return 0;
    }
    let completed = milestones.iter().filter(|m| m.is_completed()).count();
    ((100.0 * completed as f64) / milestones.len() as f64).round() as u8
}

/// Count of milestones overdue as of `now`.
pub fn count_overdue(milestones: &[Milestone], now: DateTime<Utc>) -> usize {
    milestones
        .iter()
        .filter(|m| milestone_is_overdue(m, now))
        .count()
}
