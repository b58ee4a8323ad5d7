//! Change-due evaluation for the current aligner.
//!
//! Everything here is a pure function of its inputs: `now` is injected by the
//! caller (usually `timing::now_utc()`), so the same inputs always produce the
//! same answer. Dates arrive as wire strings; parsing is defensive and a
//! missing or malformed `expected_end_date` degrades to "0 days remaining,
//! never overdue" rather than an error.

use api::models::{Aligner, AlignerStatus, Treatment};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a wire date: RFC 3339 first, then plain `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse a wire timestamp; a bare date is taken as midnight UTC, matching the
/// backend's own interpretation of date-only fields.
pub fn parse_moment(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    parse_date(raw).map(|date| date.with_time(Time::MIDNIGHT).assume_utc())
}

/// Days remaining until the next aligner change: `ceil((end - now) / day)`,
/// clamped to ≥ 0. No expected end date means 0.
pub fn days_until_change(aligner: &Aligner, now: OffsetDateTime) -> u32 {
    let Some(end) = aligner
        .expected_end_date
        .as_deref()
        .and_then(parse_moment)
    else {
        return 0;
    };

    let remaining = (end - now).as_seconds_f64() / SECONDS_PER_DAY;
    if remaining <= 0.0 {
        0
    } else {
        remaining.ceil() as u32
    }
}

/// Overdue iff the expected end has passed *and* the aligner is still active.
/// A missing expected end date is never overdue.
pub fn is_overdue(aligner: &Aligner, now: OffsetDateTime) -> bool {
    if aligner.status != AlignerStatus::Active {
        return false;
    }
    aligner
        .expected_end_date
        .as_deref()
        .and_then(parse_moment)
        .map(|end| now > end)
        .unwrap_or(false)
}

/// Overall treatment progress as a percentage, clamped to [0, 100] even when
/// the backend reports `current_aligner_number > total_aligners`.
pub fn treatment_progress_percent(treatment: &Treatment) -> f64 {
    if treatment.total_aligners == 0 {
        return 0.0;
    }
    let raw = treatment.current_aligner_number as f64 / treatment.total_aligners as f64 * 100.0;
    raw.clamp(0.0, 100.0)
}

/// The at-most-one aligner the patient is currently on.
pub fn active_aligner(treatment: &Treatment) -> Option<&Aligner> {
    treatment
        .aligners
        .iter()
        .find(|aligner| aligner.status == AlignerStatus::Active)
}
