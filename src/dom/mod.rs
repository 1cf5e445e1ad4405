//! Capabilities the toggle needs from the page.
//!
//! The body only has to carry a presentational marker class, and the toggle
//! control only has to display a glyph. Browser-backed implementations live
//! in `web` (wasm32 only); the in-memory ones stand in everywhere else.

use std::collections::BTreeSet;

use crate::theme::Glyph;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebBody, WebControl};

/// Whether `document.readyState` means the element tree is available.
///
/// Only `"loading"` has to wait for `DOMContentLoaded`; `"interactive"` and
/// `"complete"` come after it has already fired.
pub fn dom_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Element accepting presentational marker classes (the page body).
pub trait MarkerTarget {
    fn has_marker(&self, name: &str) -> bool;

    fn add_marker(&mut self, name: &str);

    fn remove_marker(&mut self, name: &str);

    /// Flip a marker, returning whether it is now present.
    fn toggle_marker(&mut self, name: &str) -> bool {
        if self.has_marker(name) {
            self.remove_marker(name);
            false
        } else {
            self.add_marker(name);
            true
        }
    }
}

/// The control the user clicks to switch themes.
pub trait ToggleControl {
    fn show_glyph(&mut self, glyph: Glyph);
}

/// In-memory body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBody {
    markers: BTreeSet<String>,
}

impl MemoryBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(name: &str) -> Self {
        let mut body = Self::new();
        body.add_marker(name);
        body
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

impl MarkerTarget for MemoryBody {
    fn has_marker(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    fn add_marker(&mut self, name: &str) {
        self.markers.insert(name.to_string());
    }

    fn remove_marker(&mut self, name: &str) {
        self.markers.remove(name);
    }
}

/// In-memory toggle control, recording what would be rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryControl {
    glyph: Option<Glyph>,
    inner_html: String,
}

impl MemoryControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last glyph shown, `None` before the first update
    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl ToggleControl for MemoryControl {
    fn show_glyph(&mut self, glyph: Glyph) {
        self.glyph = Some(glyph);
        self.inner_html = glyph.icon_html().to_string();
    }
}

impl<T: MarkerTarget + ?Sized> MarkerTarget for &mut T {
    fn has_marker(&self, name: &str) -> bool {
        (**self).has_marker(name)
    }

    fn add_marker(&mut self, name: &str) {
        (**self).add_marker(name)
    }

    fn remove_marker(&mut self, name: &str) {
        (**self).remove_marker(name)
    }
}

impl<T: ToggleControl + ?Sized> ToggleControl for &mut T {
    fn show_glyph(&mut self, glyph: Glyph) {
        (**self).show_glyph(glyph)
    }
}
