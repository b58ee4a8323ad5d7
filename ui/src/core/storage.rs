//! Local cache for stale-read tolerance.
//!
//! The client owns no server state, but it keeps the last good wear status
//! and chapter list around so a network failure (or an app restart while
//! offline) leaves the previous data on screen instead of a blank panel.
//!
//! - wasm: `window.localStorage`
//! - native: JSON files under the `directories` project data dir
//!
//! Loads never fail the UI: anything missing or unreadable degrades to
//! `None`. Saves report a displayable message on failure.

use api::models::{StoryChapter, WearStatusResponse};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use super::{platform, timing};

const STATUS_KEY: &str = "alignly.wear_status";
const CHAPTERS_KEY: &str = "alignly.story_chapters";

/// Last known wear status, stamped so the UI can say how stale it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub id: String,
    pub saved_at: String,
    pub platform: String,
    pub aligner_id: String,
    pub status: WearStatusResponse,
}

impl StatusSnapshot {
    pub fn new(aligner_id: impl Into<String>, status: &WearStatusResponse) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            saved_at: timing::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            platform: platform::platform_string(),
            aligner_id: aligner_id.into(),
            status: status.clone(),
        }
    }
}

pub fn save_status(snapshot: &StatusSnapshot) -> Result<(), String> {
    write_json(STATUS_KEY, snapshot)
}

pub fn load_status() -> Option<StatusSnapshot> {
    read_json(STATUS_KEY)
}

pub fn save_chapters(chapters: &[StoryChapter]) -> Result<(), String> {
    write_json(CHAPTERS_KEY, &chapters.to_vec())
}

pub fn load_chapters() -> Option<Vec<StoryChapter>> {
    read_json(CHAPTERS_KEY)
}

fn write_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string(value).map_err(|err| err.to_string())?;
    backend_write(key, &payload)
}

fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let payload = backend_read(key)?;
    serde_json::from_str(&payload).ok()
}

#[cfg(target_arch = "wasm32")]
fn backend_write(key: &str, payload: &str) -> Result<(), String> {
    let storage = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(key, payload)
        .map_err(|err| format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn backend_read(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn cache_path(key: &str) -> Option<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("app", "Alignly", "Alignly")?;
    Some(dirs.data_dir().join(format!("{key}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn backend_write(key: &str, payload: &str) -> Result<(), String> {
    let path = cache_path(key).ok_or_else(|| "no data directory available".to_string())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    std::fs::write(&path, payload).map_err(|err| err.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn backend_read(key: &str) -> Option<String> {
    let path = cache_path(key)?;
    std::fs::read_to_string(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{WearDaily, WearState};

    fn status() -> WearStatusResponse {
        WearStatusResponse {
            state: WearState::Paused,
            daily: WearDaily {
                date: "2026-03-10".into(),
                wear_minutes: 640,
                target_minutes: 1320,
                target_percent: 48.5,
                is_day_ok: false,
            },
            weekly: None,
            celebration: None,
        }
    }

    #[test]
    fn snapshot_carries_identity_and_timestamp() {
        let snapshot = StatusSnapshot::new("a-4", &status());
        assert_eq!(snapshot.aligner_id, "a-4");
        assert!(!snapshot.id.is_empty());
        assert!(snapshot.saved_at.contains('T'));
    }

    #[test]
    fn snapshot_serde_round_trip() {
        let snapshot = StatusSnapshot::new("a-4", &status());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StatusSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
