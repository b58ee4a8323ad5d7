use api::models::WearDayStatus;
use dioxus::prelude::*;

use crate::core::{format, streak, timing, wear};

/// The last week of wear days as compliance chips, with the streak summary
/// derived from the same digest.
#[component]
pub fn WeekHistory(days: Vec<WearDayStatus>) -> Element {
    let week = api::models::WearWeek { days: days.clone() };
    let streak = streak::evaluate(&wear::compliance_days(&week), timing::today_utc());

    rsx! {
        section { class: "progress-card progress-history",
            div { class: "progress-card__header",
                h2 { "This week" }
                span { class: "progress-card__meta",
                    "Streak: {streak.current} · best {streak.longest}"
                }
            }

            if days.is_empty() {
                p { class: "progress-card__placeholder",
                    "Wear a few days and your week will show up here."
                }
            } else {
                ul { class: "progress-history__days",
                    for day in days.iter() {
                        {render_day(day)}
                    }
                }
            }
        }
    }
}

fn render_day(day: &WearDayStatus) -> Element {
    // Show just the day-of-month from the wire date; fall back to the raw
    // string when it doesn't split cleanly.
    let label = day
        .date
        .rsplit('-')
        .next()
        .unwrap_or(day.date.as_str())
        .to_string();
    let minutes = format::format_minutes(day.wear_minutes);

    rsx! {
        li { class: format!(
                "progress-history__day {}",
                if day.is_day_ok { "progress-history__day--ok" } else { "progress-history__day--miss" }
            ),
            span { class: "progress-history__day-label", "{label}" }
            span { class: "progress-history__day-mark", aria_hidden: "true",
                if day.is_day_ok { "✓" } else { "•" }
            }
            span { class: "progress-history__day-minutes", "{minutes}" }
        }
    }
}
