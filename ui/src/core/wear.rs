//! Display derivations over wear-status responses.
//!
//! The server is authoritative for the compliance verdict (`is_day_ok`) and
//! for accumulated minutes (it folds any open session into `wear_minutes`
//! using its own clock). The client only derives presentation values from the
//! returned data, guarding against divide-by-zero and absent fields.

use api::models::{WearDaily, WearState, WearStatusResponse, WearWeek};

use super::schedule::parse_date;
use super::streak::WearDay;

/// Display percent of the daily target, clamped to [0, 100]. Zero target
/// (provisioning gap) shows as 0 rather than dividing by zero.
pub fn percent_of_target(daily: &WearDaily) -> f64 {
    if daily.target_minutes == 0 {
        return 0.0;
    }
    (daily.wear_minutes as f64 / daily.target_minutes as f64 * 100.0).clamp(0.0, 100.0)
}

/// Minutes still needed today, clamped to ≥ 0.
pub fn remaining_minutes(daily: &WearDaily) -> u32 {
    daily.target_minutes.saturating_sub(daily.wear_minutes)
}

pub fn is_wearing(status: &WearStatusResponse) -> bool {
    status.state == WearState::Wearing
}

/// Convert the weekly digest into streak-calculator input. Days whose date
/// strings don't parse are skipped rather than failing the whole digest.
pub fn compliance_days(weekly: &WearWeek) -> Vec<WearDay> {
    weekly
        .days
        .iter()
        .filter_map(|day| {
            parse_date(&day.date).map(|date| WearDay {
                date,
                compliant: day.is_day_ok,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::WearDayStatus;

    fn daily(wear: u32, target: u32, ok: bool) -> WearDaily {
        WearDaily {
            date: "2026-03-10".into(),
            wear_minutes: wear,
            target_minutes: target,
            target_percent: 0.0,
            is_day_ok: ok,
        }
    }

    #[test]
    fn percent_guards_zero_target_and_overshoot() {
        assert_eq!(percent_of_target(&daily(500, 0, false)), 0.0);
        assert_eq!(percent_of_target(&daily(1500, 1320, true)), 100.0);
        let mid = percent_of_target(&daily(660, 1320, false));
        assert!((mid - 50.0).abs() < 1e-9);
    }

    #[test]
    fn remaining_minutes_clamps() {
        assert_eq!(remaining_minutes(&daily(300, 1320, false)), 1020);
        assert_eq!(remaining_minutes(&daily(1400, 1320, true)), 0);
    }

    #[test]
    fn weekly_conversion_skips_unparseable_dates() {
        let weekly = WearWeek {
            days: vec![
                WearDayStatus {
                    date: "2026-03-09".into(),
                    wear_minutes: 1330,
                    is_day_ok: true,
                },
                WearDayStatus {
                    date: "??".into(),
                    wear_minutes: 0,
                    is_day_ok: false,
                },
            ],
        };

        let days = compliance_days(&weekly);
        assert_eq!(days.len(), 1);
        assert!(days[0].compliant);
    }
}
