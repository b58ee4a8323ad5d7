#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Home, Progress, Story, Wear};
use ui::AppConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/wear")]
    Wear {},
    #[route("/story")]
    Story {},
    #[route("/progress")]
    Progress {},
}

// Unified shared theme (no per-desktop duplicate file).
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_wear(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Wear {},
        "{label}"
    })
}
fn nav_story(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Story {},
        "{label}"
    })
}
fn nav_progress(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Progress {},
        "{label}"
    })
}

fn main() {
    #[cfg(feature = "desktop")]
    {
        let window = WindowBuilder::new().with_title("Alignly");
        let config = Config::new().with_window(window);
        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code signal; AppNavbar updates it via context
    // on language selection so shared views re-render localized strings.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        wear: nav_wear,
        story: nav_story,
        progress: nav_progress,
    });

    use_context_provider(AppConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Desktop-specific Router wrapper around the shared `AppNavbar`.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
