//! Chapter unlock evaluation for the gamified story.
//!
//! A chapter is unlocked purely as a function of current aligner progression;
//! nothing is persisted per-chapter. The backend owns the chapter list, the
//! client owns the derivation.

use api::models::StoryChapter;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChapterProgress {
    pub unlocked: usize,
    pub total: usize,
    /// 0.0 when there are no chapters; otherwise rounded to 2 decimals.
    pub percentage: f64,
}

pub fn is_chapter_unlocked(chapter: &StoryChapter, current_aligner_number: u32) -> bool {
    current_aligner_number >= chapter.required_aligner_number
}

/// The smallest-threshold chapter that is still locked, or `None` when every
/// chapter is already unlocked.
pub fn next_chapter_to_unlock(
    chapters: &[StoryChapter],
    current_aligner_number: u32,
) -> Option<&StoryChapter> {
    chapters
        .iter()
        .filter(|chapter| !is_chapter_unlocked(chapter, current_aligner_number))
        .min_by_key(|chapter| chapter.required_aligner_number)
}

pub fn chapter_progress(chapters: &[StoryChapter], current_aligner_number: u32) -> ChapterProgress {
    let total = chapters.len();
    if total == 0 {
        return ChapterProgress::default();
    }

    let unlocked = chapters
        .iter()
        .filter(|chapter| is_chapter_unlocked(chapter, current_aligner_number))
        .count();

    let raw = unlocked as f64 / total as f64 * 100.0;
    ChapterProgress {
        unlocked,
        total,
        percentage: (raw * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: &str, threshold: u32) -> StoryChapter {
        StoryChapter {
            id: id.into(),
            required_aligner_number: threshold,
            title: format!("Chapter {id}"),
            content: None,
        }
    }

    fn chapters() -> Vec<StoryChapter> {
        vec![chapter("c3", 3), chapter("c6", 6), chapter("c9", 9)]
    }

    #[test]
    fn empty_chapter_list_yields_zero_progress() {
        for current in [0, 1, 42] {
            assert_eq!(chapter_progress(&[], current), ChapterProgress::default());
        }
    }

    #[test]
    fn thresholds_three_six_nine_at_five() {
        let chapters = chapters();

        let unlocked: Vec<u32> = chapters
            .iter()
            .filter(|c| is_chapter_unlocked(c, 5))
            .map(|c| c.required_aligner_number)
            .collect();
        assert_eq!(unlocked, vec![3]);

        let next = next_chapter_to_unlock(&chapters, 5).unwrap();
        assert_eq!(next.required_aligner_number, 6);

        let progress = chapter_progress(&chapters, 5);
        assert_eq!(progress.unlocked, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percentage, 33.33);
    }

    #[test]
    fn next_unlock_is_none_when_everything_is_open() {
        let chapters = chapters();
        assert!(next_chapter_to_unlock(&chapters, 9).is_none());
        assert_eq!(chapter_progress(&chapters, 9).percentage, 100.0);
    }

    #[test]
    fn next_unlock_ignores_list_order() {
        let shuffled = vec![chapter("c9", 9), chapter("c3", 3), chapter("c6", 6)];
        assert_eq!(
            next_chapter_to_unlock(&shuffled, 1)
                .unwrap()
                .required_aligner_number,
            3
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let c = chapter("c6", 6);
        assert!(!is_chapter_unlocked(&c, 5));
        assert!(is_chapter_unlocked(&c, 6));
    }
}
