use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Home, Progress, Story, Wear};
use ui::AppConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/wear")]
    Wear {},
    #[route("/story")]
    Story {},
    #[route("/progress")]
    Progress {},
}

// Unified shared theme, embedded from the ui crate (single source of truth).
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
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code signal; AppNavbar updates it via context
    // on language selection so shared views re-render localized strings.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register localized navigation builder
    register_nav(NavBuilder {
        home: nav_home,
        wear: nav_wear,
        story: nav_story,
        progress: nav_progress,
    });

    // Explicit app configuration for the shared views (backend base URL,
    // patient identity, optional bearer token).
    use_context_provider(AppConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
