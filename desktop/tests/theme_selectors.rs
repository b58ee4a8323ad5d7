#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  wear tracker and progress cards) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for the tracker, story cards, progress
  meters, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Wear tracker
    ".tracker-wear {",
    ".tracker-wear__state--wearing",
    ".tracker-wear__meter-fill",
    ".tracker-wear__error",
    // Story cards
    ".story-list__item--locked",
    ".story-list__progress-fill",
    // Progress cards
    ".progress-overview__meter",
    ".progress-overview__badge--overdue",
    ".progress-history__day--ok",
];

#[test]
fn embedded_theme_is_not_blank() {
    // An accidental truncation or include path break would otherwise only
    // show up as unstyled windows at runtime.
    assert!(
        !THEME_CSS.trim().is_empty(),
        "Embedded theme CSS is empty; check the include path in desktop/src/main.rs"
    );
}

#[test]
fn required_theme_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Unified theme is missing required selector(s): {missing:?}"
    );
}
