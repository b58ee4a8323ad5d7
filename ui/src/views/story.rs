use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::story::{ChapterList, StoryState};
use crate::views::describe_error;

#[component]
pub fn Story() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    let loaded = use_resource(move || {
        let config = config.clone();
        async move {
            let client = config.client();

            let current = client
                .treatment_for_patient(&config.patient_id)
                .await
                .ok()
                .flatten()
                .map(|treatment| treatment.current_aligner_number)
                .unwrap_or(0);

            let state = match client.story_chapters(&config.patient_id).await {
                Ok(chapters) => StoryState::fresh(chapters),
                Err(err) => StoryState::degraded(describe_error(&err)),
            };

            (state, current)
        }
    });

    rsx! {
        section { class: "page page-story",
            h1 { {crate::t!("story-title")} }
            p { {crate::t!("story-intro")} }

            match loaded() {
                Some((state, current)) => rsx! {
                    if let Some(message) = state.error.as_ref() {
                        div { class: "story-card__notice", "⚠️ {message}" }
                    }
                    if state.from_cache {
                        div { class: "story-card__notice story-card__notice--stale",
                            "Showing your last downloaded chapters."
                        }
                    }
                    ChapterList {
                        chapters: state.chapters.clone(),
                        current_aligner_number: current,
                    }
                },
                None => rsx! {
                    p { class: "story-card__placeholder", "Loading your story…" }
                },
            }
        }
    }
}
