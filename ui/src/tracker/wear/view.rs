use api::models::{CheckInRequest, WearState, WearStatusResponse};
use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use futures_util::{FutureExt, StreamExt};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::config::AppConfig;
use crate::core::poll::{self, PollHandle, Ticker, WEAR_POLL_INTERVAL_MS};
use crate::core::storage::{self, StatusSnapshot};
use crate::core::{format, schedule, timing, wear};
use crate::views::describe_error;

use super::session::WearSession;

#[component]
pub fn WearView() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    // Seed from the local cache so a cold offline start still shows the last
    // known status (flagged stale until the first successful refresh).
    let session = use_signal(|| {
        let mut seeded = WearSession::default();
        if let Some(snapshot) = storage::load_status() {
            seeded.apply_cached(snapshot);
        }
        seeded
    });
    let status_line = use_signal(|| "Syncing your wear status…".to_string());
    let last_error = use_signal(|| Option::<String>::None);

    let coroutine = {
        let config = config.clone();
        let session_ref = session.clone();
        let status_ref = status_line.clone();
        let error_ref = last_error.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<WearEvent>| {
            let client = config.client();
            let patient_id = config.patient_id.clone();
            let mut session_signal = session_ref.clone();
            let mut status_signal = status_ref.clone();
            let mut error_signal = error_ref.clone();

            async move {
                // The poll pair lives for as long as the state is `wearing`;
                // dropping the handle cancels the ticker within one tick, so
                // view teardown can't leave an orphaned timer.
                let mut poll: Option<(Ticker, PollHandle)> = None;

                refresh(
                    &client,
                    &patient_id,
                    &mut session_signal,
                    &mut status_signal,
                    &mut error_signal,
                )
                .await;
                sync_poll(session_signal.with(|s| s.is_wearing()), &mut poll);

                loop {
                    let incoming = match poll.as_ref().map(|(ticker, _)| ticker.clone()) {
                        Some(ticker) => {
                            let mut tick = Box::pin(ticker.next_tick().fuse());
                            futures_util::select! {
                                event = rx.next() => match event {
                                    Some(event) => Incoming::Event(event),
                                    None => break,
                                },
                                alive = tick => Incoming::Tick(alive),
                            }
                        }
                        None => match rx.next().await {
                            Some(event) => Incoming::Event(event),
                            None => break,
                        },
                    };

                    match incoming {
                        Incoming::Tick(false) => {
                            poll = None;
                        }
                        Incoming::Tick(true) | Incoming::Event(WearEvent::Refresh) => {
                            refresh(
                                &client,
                                &patient_id,
                                &mut session_signal,
                                &mut status_signal,
                                &mut error_signal,
                            )
                            .await;
                        }
                        Incoming::Event(WearEvent::Pause) => {
                            if let Some(aligner_id) = session_signal.with(|s| s.aligner_id.clone()) {
                                let outcome = client.pause_wear(&aligner_id).await;
                                absorb(
                                    outcome.map(|status| (aligner_id, status)),
                                    &mut session_signal,
                                    &mut status_signal,
                                    &mut error_signal,
                                );
                            }
                        }
                        Incoming::Event(WearEvent::Resume) => {
                            if let Some(aligner_id) = session_signal.with(|s| s.aligner_id.clone()) {
                                let outcome = client.resume_wear(&aligner_id).await;
                                absorb(
                                    outcome.map(|status| (aligner_id, status)),
                                    &mut session_signal,
                                    &mut status_signal,
                                    &mut error_signal,
                                );
                            }
                        }
                        Incoming::Event(WearEvent::CheckIn { wore }) => {
                            if let Some(aligner_id) = session_signal.with(|s| s.aligner_id.clone()) {
                                let body = backdated_check_in(wore, timing::today_utc());
                                let outcome = client.check_in(&aligner_id, &body).await;
                                absorb(
                                    outcome.map(|status| (aligner_id, status)),
                                    &mut session_signal,
                                    &mut status_signal,
                                    &mut error_signal,
                                );
                            }
                        }
                    }

                    sync_poll(session_signal.with(|s| s.is_wearing()), &mut poll);
                }
            }
        })
    };

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: WearEvent| {
            coroutine.send(event);
        }
    };

    let snapshot = session();
    let is_wearing = snapshot.is_wearing();
    let has_status = snapshot.status.is_some();
    let streak = snapshot.streak(timing::today_utc());
    let celebration = snapshot.celebration().cloned();
    let stale_notice = if snapshot.stale {
        snapshot
            .last_synced
            .clone()
            .map(|stamp| format!("Showing last known status from {stamp}. We'll keep retrying."))
    } else {
        None
    };
    let error_message = last_error();

    let state_label = match snapshot.status.as_ref().map(|s| s.state) {
        Some(WearState::Wearing) => crate::t!("wear-state-wearing"),
        Some(WearState::Paused) => crate::t!("wear-state-paused"),
        None => "—".to_string(),
    };

    rsx! {
        article { class: "tracker tracker-wear",
            div { class: "tracker-wear__controls",
                span {
                    class: format!(
                        "tracker-wear__state {}",
                        if is_wearing { "tracker-wear__state--wearing" } else { "tracker-wear__state--paused" }
                    ),
                    "{state_label}"
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !is_wearing,
                    onclick: {
                        let send_event = send_event.clone();
                        move |_| send_event(WearEvent::Pause)
                    },
                    "Pause"
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: is_wearing || !has_status,
                    onclick: {
                        let send_event = send_event.clone();
                        move |_| send_event(WearEvent::Resume)
                    },
                    "Resume"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: {
                        let send_event = send_event.clone();
                        move |_| send_event(WearEvent::Refresh)
                    },
                    "Refresh"
                }
            }

            if let Some(status) = snapshot.status.as_ref() {
                {render_daily(status)}
            } else {
                p { class: "tracker-wear__placeholder", {status_line()} }
            }

            div { class: "tracker-wear__streak",
                span { class: "tracker-wear__streak-flame", aria_hidden: "true" }
                span { "Streak: {streak.current} day(s) · best {streak.longest}" }
            }

            div { class: "tracker-wear__checkin",
                span { "Forgot to track? Log yesterday:" }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    disabled: !has_status,
                    onclick: {
                        let send_event = send_event.clone();
                        move |_| send_event(WearEvent::CheckIn { wore: true })
                    },
                    "I wore it"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: !has_status,
                    onclick: move |_| send_event(WearEvent::CheckIn { wore: false }),
                    "I missed it"
                }
            }

            if let Some(celebration) = celebration {
                div { class: "tracker-wear__celebration",
                    "🎉 "
                    {celebration.message.clone().unwrap_or_else(|| "Nice work!".to_string())}
                    if let Some(points) = celebration.points {
                        span { class: "tracker-wear__points", " +{points} pts" }
                    }
                }
            }

            if let Some(notice) = stale_notice {
                div { class: "tracker-wear__stale", "{notice}" }
            }

            if let Some(err) = error_message {
                div { class: "tracker-wear__error", "⚠️ {err}" }
            }
        }
    }
}

fn render_daily(status: &WearStatusResponse) -> Element {
    let daily = &status.daily;
    let percent = wear::percent_of_target(daily);
    let remaining = wear::remaining_minutes(daily);
    let worn = format::format_minutes(daily.wear_minutes);
    let target = format::format_minutes(daily.target_minutes);
    let percent_label = format::format_percent(percent);

    rsx! {
        div { class: "tracker-wear__daily",
            div { class: "tracker-wear__meter", role: "progressbar",
                div {
                    class: "tracker-wear__meter-fill",
                    style: "width: {percent}%",
                }
            }
            p { class: "tracker-wear__minutes", "{worn} of {target} ({percent_label})" }
            if daily.is_day_ok {
                p { class: "tracker-wear__verdict tracker-wear__verdict--ok", "On track today — keep it up!" }
            } else {
                p { class: "tracker-wear__verdict",
                    "{format::format_minutes(remaining)} to go for an on-track day."
                }
            }
        }
    }
}

/// Fetch the active aligner's wear status. `Ok(None)` means the patient has
/// no active treatment or no active aligner yet, which is "no current data"
/// rather than an error.
async fn fetch_status(
    client: &ApiClient,
    patient_id: &str,
) -> Result<Option<(String, WearStatusResponse)>, ApiError> {
    let Some(treatment) = client.treatment_for_patient(patient_id).await? else {
        return Ok(None);
    };
    let Some(aligner) = schedule::active_aligner(&treatment) else {
        return Ok(None);
    };
    let aligner_id = aligner.id.clone();
    let status = client.wear_status(&aligner_id, patient_id).await?;
    Ok(Some((aligner_id, status)))
}

async fn refresh(
    client: &ApiClient,
    patient_id: &str,
    session: &mut Signal<WearSession>,
    status_line: &mut Signal<String>,
    last_error: &mut Signal<Option<String>>,
) {
    match fetch_status(client, patient_id).await {
        Ok(Some((aligner_id, status))) => {
            absorb(Ok((aligner_id, status)), session, status_line, last_error);
        }
        Ok(None) => {
            status_line.set("No active treatment yet. Check back once your aligners are set up.".to_string());
        }
        Err(err) => {
            absorb(Err(err), session, status_line, last_error);
        }
    }
}

/// Merge an API outcome into the session. Success persists a cache snapshot;
/// failure keeps the previous status on screen and flags it stale.
fn absorb(
    outcome: Result<(String, WearStatusResponse), ApiError>,
    session: &mut Signal<WearSession>,
    status_line: &mut Signal<String>,
    last_error: &mut Signal<Option<String>>,
) {
    match outcome {
        Ok((aligner_id, status)) => {
            let synced_at = timing::now_utc().format(&Rfc3339).unwrap_or_default();
            session.with_mut(|s| s.apply(&aligner_id, status.clone(), synced_at));
            // Cache write is best-effort; a failure never blocks the UI.
            let _ = storage::save_status(&StatusSnapshot::new(aligner_id, &status));
            status_line.set("Up to date.".to_string());
            last_error.set(None);
        }
        Err(err) => {
            session.with_mut(|s| s.mark_stale());
            last_error.set(Some(describe_error(&err)));
        }
    }
}

/// Build the catch-up check-in body. The buttons log *yesterday*, so the
/// request carries an explicit backdated wire date; sending no date would let
/// the backend record the answer against today's still-accruing day.
fn backdated_check_in(wore: bool, today: time::Date) -> CheckInRequest {
    let date = today
        .previous_day()
        .and_then(|day| day.format(&format_description!("[year]-[month]-[day]")).ok());
    CheckInRequest {
        wore_aligner: wore,
        date,
    }
}

/// Start or stop the poll to match the wear state. Replacing with `None`
/// drops the handle, which cancels the ticker within one tick.
fn sync_poll(wearing: bool, poll: &mut Option<(Ticker, PollHandle)>) {
    match (wearing, poll.is_some()) {
        (true, false) => *poll = Some(poll::ticker(WEAR_POLL_INTERVAL_MS)),
        (false, true) => *poll = None,
        _ => {}
    }
}

#[derive(Debug, Clone)]
enum WearEvent {
    Refresh,
    Pause,
    Resume,
    CheckIn { wore: bool },
}

enum Incoming {
    Event(WearEvent),
    Tick(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn check_in_is_backdated_to_the_previous_day() {
        let body = backdated_check_in(true, date!(2026 - 03 - 10));
        assert!(body.wore_aligner);
        assert_eq!(body.date.as_deref(), Some("2026-03-09"));

        // A missed day backdates the same way.
        let body = backdated_check_in(false, date!(2026 - 03 - 01));
        assert!(!body.wore_aligner);
        assert_eq!(body.date.as_deref(), Some("2026-02-28"));
    }

    #[test]
    fn sync_poll_starts_ticker_when_wearing() {
        let mut poll = None;
        sync_poll(true, &mut poll);
        let (_, handle) = poll.as_ref().unwrap();
        assert!(!handle.is_cancelled());

        // Repeated syncs while wearing keep the same poll pair alive.
        sync_poll(true, &mut poll);
        assert!(poll.is_some());
    }

    #[test]
    fn sync_poll_cancels_within_one_tick_on_pause() {
        let mut poll = None;
        sync_poll(true, &mut poll);
        let ticker = poll.as_ref().map(|(t, _)| t.clone()).unwrap();

        // Dropping the pair via the paused transition cancels the loop side.
        sync_poll(false, &mut poll);
        assert!(poll.is_none());
        assert!(!futures::executor::block_on(ticker.next_tick()));
    }

    #[test]
    fn sync_poll_is_a_no_op_when_already_stopped() {
        let mut poll: Option<(Ticker, PollHandle)> = None;
        sync_poll(false, &mut poll);
        assert!(poll.is_none());
    }
}
