//! Theme Toggle
//!
//! Dark mode for web pages: a marker class on the body, a toggle control
//! whose icon offers the other theme, and the choice persisted under a single
//! local storage key.
//!
//! This library provides:
//! - Pure light/dark transitions (`theme`)
//! - Storage and page capabilities with in-memory fakes (`store`, `dom`)
//! - The page controller (`controller`)
//! - A browser shim for plain HTML pages (`web`, wasm32 only)
//! - A Dioxus component for Dioxus-rendered pages (`app`)

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod store;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ToggleConfig;
pub use controller::ThemeToggleController;
pub use error::ThemeError;
pub use theme::{compute_initial_state, compute_next_state, Glyph, ThemePreference, Transition};
