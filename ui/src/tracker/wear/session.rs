//! Client-side snapshot of the wear tracking state.
//!
//! The backend owns the session; this struct just merges the latest response
//! into something the view can render, remembers whether what's on screen is
//! fresh or a stale carry-over, and derives the streak from the weekly digest.

use api::models::{Celebration, WearState, WearStatusResponse};
use time::Date;

use crate::core::storage::StatusSnapshot;
use crate::core::streak::{self, StreakSummary};
use crate::core::wear;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WearSession {
    pub aligner_id: Option<String>,
    pub status: Option<WearStatusResponse>,
    /// True when `status` is a cached or previous value kept after a failed
    /// refresh (stale-read tolerance).
    pub stale: bool,
    pub last_synced: Option<String>,
}

impl WearSession {
    /// Merge a fresh server response.
    pub fn apply(&mut self, aligner_id: &str, response: WearStatusResponse, synced_at: String) {
        self.aligner_id = Some(aligner_id.to_string());
        self.status = Some(response);
        self.stale = false;
        self.last_synced = Some(synced_at);
    }

    /// Seed from the local cache (app start while offline).
    pub fn apply_cached(&mut self, snapshot: StatusSnapshot) {
        self.aligner_id = Some(snapshot.aligner_id);
        self.status = Some(snapshot.status);
        self.stale = true;
        self.last_synced = Some(snapshot.saved_at);
    }

    /// A refresh failed: keep whatever is displayed, but flag it.
    pub fn mark_stale(&mut self) {
        if self.status.is_some() {
            self.stale = true;
        }
    }

    pub fn is_wearing(&self) -> bool {
        self.status
            .as_ref()
            .map(|status| status.state == WearState::Wearing)
            .unwrap_or(false)
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.status.as_ref().and_then(|s| s.celebration.as_ref())
    }

    /// Streak over the weekly digest, or zeroes when no digest came back.
    pub fn streak(&self, today: Date) -> StreakSummary {
        self.status
            .as_ref()
            .and_then(|status| status.weekly.as_ref())
            .map(|weekly| streak::evaluate(&wear::compliance_days(weekly), today))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{WearDaily, WearDayStatus, WearWeek};
    use time::macros::date;

    fn response(state: WearState) -> WearStatusResponse {
        WearStatusResponse {
            state,
            daily: WearDaily {
                date: "2026-03-10".into(),
                wear_minutes: 700,
                target_minutes: 1320,
                target_percent: 53.0,
                is_day_ok: false,
            },
            weekly: Some(WearWeek {
                days: vec![
                    WearDayStatus {
                        date: "2026-03-08".into(),
                        wear_minutes: 1340,
                        is_day_ok: true,
                    },
                    WearDayStatus {
                        date: "2026-03-09".into(),
                        wear_minutes: 1325,
                        is_day_ok: true,
                    },
                ],
            }),
            celebration: None,
        }
    }

    #[test]
    fn apply_clears_staleness() {
        let mut session = WearSession::default();
        session.mark_stale(); // No status yet: nothing to flag.
        assert!(!session.stale);

        session.apply("a-4", response(WearState::Wearing), "2026-03-10T09:00:00Z".into());
        assert!(session.is_wearing());
        assert!(!session.stale);

        session.mark_stale();
        assert!(session.stale);

        session.apply("a-4", response(WearState::Paused), "2026-03-10T09:05:00Z".into());
        assert!(!session.stale);
        assert!(!session.is_wearing());
    }

    #[test]
    fn streak_is_derived_from_weekly_digest() {
        let mut session = WearSession::default();
        session.apply("a-4", response(WearState::Wearing), "now".into());

        // Two compliant days ending yesterday; today still accruing.
        let streak = session.streak(date!(2026 - 03 - 10));
        assert_eq!(streak.current, 2);
    }

    #[test]
    fn streak_is_zero_without_digest() {
        let mut session = WearSession::default();
        let mut r = response(WearState::Paused);
        r.weekly = None;
        session.apply("a-4", r, "now".into());
        assert_eq!(session.streak(date!(2026 - 03 - 10)), StreakSummary::default());
    }
}
