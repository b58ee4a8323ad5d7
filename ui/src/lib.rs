//! Shared UI crate for Alignly. Most cross-platform logic and views live here.

pub mod config;
pub mod core;
pub mod i18n;
pub mod progress;
pub mod story;
pub mod tracker;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use config::AppConfig;
