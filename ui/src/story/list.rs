use api::models::StoryChapter;
use dioxus::prelude::*;

use crate::core::story;

/// Chapter cards with unlock state derived from current aligner progression.
#[component]
pub fn ChapterList(chapters: Vec<StoryChapter>, current_aligner_number: u32) -> Element {
    let progress = story::chapter_progress(&chapters, current_aligner_number);
    let next_threshold =
        story::next_chapter_to_unlock(&chapters, current_aligner_number)
            .map(|chapter| chapter.required_aligner_number);

    let mut ordered = chapters.clone();
    ordered.sort_by_key(|chapter| chapter.required_aligner_number);

    rsx! {
        section { class: "story-card story-list",
            div { class: "story-card__header",
                h2 { "Chapters" }
                span { class: "story-card__meta",
                    "{progress.unlocked}/{progress.total} unlocked"
                }
            }

            div { class: "story-list__progress", role: "progressbar",
                div {
                    class: "story-list__progress-fill",
                    style: "width: {progress.percentage}%",
                }
            }

            match next_threshold {
                Some(threshold) => rsx! {
                    p { class: "story-list__next",
                        "Aligner {threshold} unlocks your next chapter."
                    }
                },
                None if progress.total > 0 => rsx! {
                    p { class: "story-list__next story-list__next--complete",
                        "Every chapter is unlocked. What an adventure!"
                    }
                },
                None => rsx! {
                    p { class: "story-card__placeholder",
                        "Your story will appear here once your treatment begins."
                    }
                },
            }

            ul { class: "story-list__items",
                for chapter in ordered.into_iter() {
                    {render_chapter(chapter, current_aligner_number)}
                }
            }
        }
    }
}

fn render_chapter(chapter: StoryChapter, current_aligner_number: u32) -> Element {
    let unlocked = story::is_chapter_unlocked(&chapter, current_aligner_number);
    let threshold = chapter.required_aligner_number;

    rsx! {
        li { class: format!(
                "story-list__item {}",
                if unlocked { "story-list__item--unlocked" } else { "story-list__item--locked" }
            ),
            span { class: "story-list__badge", aria_hidden: "true",
                if unlocked { "📖" } else { "🔒" }
            }
            div { class: "story-list__body",
                h3 { class: "story-list__title", "{chapter.title}" }
                if unlocked {
                    if let Some(content) = chapter.content.as_ref() {
                        p { class: "story-list__content", "{content}" }
                    }
                } else {
                    p { class: "story-list__teaser", "Unlocks at aligner {threshold}." }
                }
            }
        }
    }
}
