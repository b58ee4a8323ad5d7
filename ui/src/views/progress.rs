use api::models::{Treatment, WearDayStatus};
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::core::schedule;
use crate::progress::{TreatmentOverview, WeekHistory};
use crate::views::describe_error;

type ProgressData = Result<Option<(Treatment, Vec<WearDayStatus>)>, String>;

#[component]
pub fn Progress() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let confirm_error = use_signal(|| Option::<String>::None);

    let loaded = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { load_progress(&config).await }
        }
    });

    let on_confirm = {
        let config = config.clone();
        let mut loaded = loaded.clone();
        let mut confirm_error = confirm_error.clone();
        move |aligner_id: String| {
            let client = config.client();
            spawn(async move {
                match client.confirm_aligner_change(&aligner_id).await {
                    Ok(_) => {
                        confirm_error.set(None);
                        loaded.restart();
                    }
                    Err(err) => confirm_error.set(Some(describe_error(&err))),
                }
            });
        }
    };

    let confirm_message = confirm_error();

    rsx! {
        section { class: "page page-progress",
            h1 { {crate::t!("progress-title")} }
            p { {crate::t!("progress-intro")} }

            if let Some(message) = confirm_message {
                div { class: "progress-card__notice", "⚠️ {message}" }
            }

            match loaded() {
                Some(Ok(Some((treatment, week)))) => rsx! {
                    div { class: "progress__panels",
                        TreatmentOverview {
                            treatment: treatment.clone(),
                            on_confirm: on_confirm,
                        }
                        WeekHistory { days: week.clone() }
                    }
                },
                Some(Ok(None)) => rsx! {
                    p { class: "progress-card__placeholder",
                        "No treatment on file yet. Your orthodontist will set one up."
                    }
                },
                Some(Err(message)) => rsx! {
                    div { class: "progress-card__notice", "⚠️ {message}" }
                },
                None => rsx! {
                    p { class: "progress-card__placeholder", "Loading your progress…" }
                },
            }
        }
    }
}

/// Treatment plus the weekly wear digest for its active aligner. The digest
/// is best-effort: a failure there still renders the overview.
async fn load_progress(config: &AppConfig) -> ProgressData {
    let client = config.client();

    let treatment = match client.treatment_for_patient(&config.patient_id).await {
        Ok(Some(treatment)) => treatment,
        Ok(None) => return Ok(None),
        Err(err) => return Err(describe_error(&err)),
    };

    let week = match schedule::active_aligner(&treatment) {
        Some(aligner) => client
            .wear_status(&aligner.id, &config.patient_id)
            .await
            .ok()
            .and_then(|status| status.weekly)
            .map(|weekly| weekly.days)
            .unwrap_or_default(),
        None => Vec::new(),
    };

    Ok(Some((treatment, week)))
}
