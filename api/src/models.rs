//! Wire types for the Alignly backend.
//!
//! Dates and timestamps travel as strings (`YYYY-MM-DD` or RFC 3339) and are
//! parsed by the calculators in `ui::core`; a malformed date never fails
//! deserialization, it just degrades the derived value.

use serde::{Deserialize, Serialize};

/// Backend-authoritative aligner lifecycle. The client never transitions
/// state locally; `confirm` asks the backend to perform `active → completed`
/// and advance the next aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignerStatus {
    Pending,
    Active,
    Completed,
    Delayed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aligner {
    pub id: String,
    /// Sequence position within the treatment (monotonically increasing).
    pub number: u32,
    pub status: AlignerStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub expected_end_date: Option<String>,
    #[serde(default)]
    pub actual_end_date: Option<String>,
    /// Target daily wear in hours.
    #[serde(default)]
    pub wear_time_hours: Option<f64>,
    /// Days between aligner changes.
    #[serde(default)]
    pub change_interval_days: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub id: String,
    pub patient_id: String,
    pub status: TreatmentStatus,
    pub current_aligner_number: u32,
    pub total_aligners: u32,
    #[serde(default)]
    pub aligners: Vec<Aligner>,
}

/// Whether the tracked wear session is currently accruing minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WearState {
    Wearing,
    Paused,
}

/// Per-day wear aggregate, recomputed server-side on every query (the server
/// folds any open session into `wear_minutes` using its own clock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearDaily {
    pub date: String,
    pub wear_minutes: u32,
    pub target_minutes: u32,
    pub target_percent: f64,
    pub is_day_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearDayStatus {
    pub date: String,
    pub wear_minutes: u32,
    pub is_day_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearWeek {
    #[serde(default)]
    pub days: Vec<WearDayStatus>,
}

/// Optional celebratory payload piggybacked on wear responses (streak
/// milestones, chapter unlocks). Display-only; the economy lives server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Celebration {
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearStatusResponse {
    pub state: WearState,
    pub daily: WearDaily,
    #[serde(default)]
    pub weekly: Option<WearWeek>,
    #[serde(default)]
    pub celebration: Option<Celebration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub wore_aligner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Narrative chapter gated behind aligner progression. `unlocked` is derived
/// from current progress by `ui::core::story`, never persisted per-chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryChapter {
    pub id: String,
    pub required_aligner_number: u32,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wear_status_round_trips_camel_case() {
        let json = serde_json::json!({
            "state": "wearing",
            "daily": {
                "date": "2026-03-02",
                "wearMinutes": 510,
                "targetMinutes": 1320,
                "targetPercent": 38.6,
                "isDayOk": false
            },
            "weekly": { "days": [] },
            "celebration": { "kind": "streak", "points": 25 }
        });

        let status: WearStatusResponse = serde_json::from_value(json).unwrap();
        assert_eq!(status.state, WearState::Wearing);
        assert_eq!(status.daily.wear_minutes, 510);
        assert_eq!(status.celebration.unwrap().points, Some(25));
    }

    #[test]
    fn aligner_tolerates_missing_dates() {
        let json = serde_json::json!({
            "id": "a-7",
            "number": 7,
            "status": "active"
        });

        let aligner: Aligner = serde_json::from_value(json).unwrap();
        assert_eq!(aligner.status, AlignerStatus::Active);
        assert!(aligner.expected_end_date.is_none());
    }
}
