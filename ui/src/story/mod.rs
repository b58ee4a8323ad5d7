mod list;
pub use list::ChapterList;

use api::models::StoryChapter;

use crate::core::storage;

/// Chapter list plus where it came from (fresh fetch or local cache).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryState {
    pub chapters: Vec<StoryChapter>,
    pub from_cache: bool,
    pub error: Option<String>,
}

impl StoryState {
    pub fn fresh(chapters: Vec<StoryChapter>) -> Self {
        // Cache write is best-effort.
        let _ = storage::save_chapters(&chapters);
        Self {
            chapters,
            from_cache: false,
            error: None,
        }
    }

    /// Fall back to cached chapters, keeping the error for a soft banner.
    pub fn degraded(message: String) -> Self {
        match storage::load_chapters() {
            Some(chapters) => Self {
                chapters,
                from_cache: true,
                error: Some(message),
            },
            None => Self {
                chapters: Vec::new(),
                from_cache: false,
                error: Some(message),
            },
        }
    }
}
