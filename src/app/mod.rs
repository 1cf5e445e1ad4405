//! Dioxus application entry point.
//!
//! A minimal root hosting the theme provider and the toggle button, for
//! pages rendered by Dioxus rather than served as plain HTML.

use dioxus::prelude::*;

pub mod components;
pub mod theme;

use crate::config::ToggleConfig;
use components::ThemeToggle;
use theme::use_theme_provider;

/// Root app component
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + body class)
    use_theme_provider(ToggleConfig::default());

    rsx! {
        header { class: "site-header",
            ThemeToggle {}
        }
    }
}
