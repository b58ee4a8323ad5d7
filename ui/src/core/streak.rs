//! Streak evaluation over daily wear compliance.
//!
//! Rules
//! -----
//! - The current streak is the run of consecutive compliant days ending at
//!   (or just before) `today`.
//! - A calendar day with no record and no passed threshold breaks the streak
//!   at that day.
//! - Today is special: while it is still accruing wear minutes it must not
//!   prematurely break the streak, so an absent or not-yet-compliant today is
//!   skipped and the walk starts at yesterday. A compliant today counts.
//! - The longest streak is the longest historical run of consecutive compliant
//!   days, and never less than the current streak.
//!
//! Pure over its inputs; `today` is injected by the caller.

use std::collections::BTreeMap;

use time::{Date, Duration};

/// One calendar day of compliance history (threshold verdict is the server's).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WearDay {
    pub date: Date,
    pub compliant: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

pub fn evaluate(history: &[WearDay], today: Date) -> StreakSummary {
    // Last record wins when the same day appears twice.
    let by_day: BTreeMap<Date, bool> = history
        .iter()
        .map(|day| (day.date, day.compliant))
        .collect();

    let mut current = 0u32;
    if by_day.get(&today).copied() == Some(true) {
        current += 1;
    }
    // Today absent or still in progress never breaks; the walk continues
    // (or starts) at yesterday either way.
    let mut cursor = today.previous_day();

    while let Some(day) = cursor {
        if by_day.get(&day).copied() == Some(true) {
            current += 1;
            cursor = day.previous_day();
        } else {
            break;
        }
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<Date> = None;
    for (&date, &compliant) in &by_day {
        let contiguous = prev
            .and_then(|p| p.next_day())
            .map(|next| next == date)
            .unwrap_or(false);

        run = if compliant {
            if contiguous { run + 1 } else { 1 }
        } else {
            0
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    StreakSummary {
        current,
        longest: longest.max(current),
    }
}

/// Convenience for building histories relative to a fixed day.
pub fn days_before(today: Date, offsets: &[(i64, bool)]) -> Vec<WearDay> {
    offsets
        .iter()
        .filter_map(|&(offset, compliant)| {
            today
                .checked_sub(Duration::days(offset))
                .map(|date| WearDay { date, compliant })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 03 - 10);

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(evaluate(&[], TODAY), StreakSummary::default());
    }

    #[test]
    fn today_in_progress_does_not_break_streak() {
        // Three compliant days ending yesterday; today has no verdict yet.
        let history = days_before(TODAY, &[(1, true), (2, true), (3, true)]);
        let streak = evaluate(&history, TODAY);
        assert_eq!(streak.current, 3);

        // Today present but below threshold (still accruing) behaves the same.
        let history = days_before(TODAY, &[(0, false), (1, true), (2, true), (3, true)]);
        assert_eq!(evaluate(&history, TODAY).current, 3);
    }

    #[test]
    fn compliant_today_extends_the_streak() {
        let history = days_before(TODAY, &[(0, true), (1, true)]);
        assert_eq!(evaluate(&history, TODAY).current, 2);
    }

    #[test]
    fn missing_day_breaks_the_streak() {
        // Gap at offset 2: the run before it is unreachable.
        let history = days_before(TODAY, &[(1, true), (3, true), (4, true)]);
        let streak = evaluate(&history, TODAY);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn non_compliant_day_breaks_the_streak() {
        let history = days_before(TODAY, &[(1, true), (2, false), (3, true), (4, true)]);
        let streak = evaluate(&history, TODAY);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn longest_is_at_least_current() {
        let history = days_before(TODAY, &[(0, true), (1, true), (2, true)]);
        let streak = evaluate(&history, TODAY);
        assert_eq!(streak.current, 3);
        assert!(streak.longest >= streak.current);
    }

    #[test]
    fn duplicate_days_take_the_last_record() {
        let mut history = days_before(TODAY, &[(1, false)]);
        history.extend(days_before(TODAY, &[(1, true)]));
        assert_eq!(evaluate(&history, TODAY).current, 1);
    }
}
