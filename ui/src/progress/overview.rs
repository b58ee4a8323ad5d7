use api::models::Treatment;
use dioxus::prelude::*;

use crate::core::{format, schedule, timing};

/// Treatment-level progress card: overall percent, current aligner, change
/// schedule, and the confirm-change action when a change is due.
#[component]
pub fn TreatmentOverview(treatment: Treatment, on_confirm: EventHandler<String>) -> Element {
    let now = timing::now_utc();
    let percent = schedule::treatment_progress_percent(&treatment);
    let percent_label = format::format_percent(percent);

    let active = schedule::active_aligner(&treatment).cloned();
    let schedule_line = active.as_ref().map(|aligner| {
        let days = schedule::days_until_change(aligner, now);
        let overdue = schedule::is_overdue(aligner, now);
        (aligner.id.clone(), aligner.number, days, overdue)
    });

    rsx! {
        section { class: "progress-card progress-overview",
            div { class: "progress-card__header",
                h2 { "Overview" }
                span { class: "progress-card__meta",
                    "Aligner {treatment.current_aligner_number} of {treatment.total_aligners}"
                }
            }

            div { class: "progress-overview__meter", role: "progressbar",
                div {
                    class: "progress-overview__meter-fill",
                    style: "width: {percent}%",
                }
            }
            p { class: "progress-overview__percent", "{percent_label} of your treatment done" }

            match schedule_line {
                Some((aligner_id, number, days, overdue)) => rsx! {
                    div { class: "progress-overview__schedule",
                        if overdue {
                            span { class: "progress-overview__badge progress-overview__badge--overdue",
                                "Change overdue"
                            }
                            p { "Aligner {number} was due for a change. Ready to move on?" }
                        } else {
                            p { "Next change in {format::format_days(days)}." }
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            disabled: !overdue && days > 0,
                            onclick: move |_| on_confirm.call(aligner_id.clone()),
                            "Confirm aligner change"
                        }
                    }
                },
                None => rsx! {
                    p { class: "progress-card__placeholder",
                        "No aligner is active right now."
                    }
                },
            }
        }
    }
}
