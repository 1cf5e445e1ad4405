use super::{MarkerTarget, ToggleControl};
use crate::theme::Glyph;

/// `document.body`, marked through its `classList`.
#[derive(Debug, Clone)]
pub struct WebBody {
    element: web_sys::HtmlElement,
}

impl WebBody {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }
}

impl MarkerTarget for WebBody {
    fn has_marker(&self, name: &str) -> bool {
        self.element.class_list().contains(name)
    }

    fn add_marker(&mut self, name: &str) {
        let _ = self.element.class_list().add_1(name);
    }

    fn remove_marker(&mut self, name: &str) {
        let _ = self.element.class_list().remove_1(name);
    }
}

/// Toggle control element; the glyph replaces its inner HTML.
#[derive(Debug, Clone)]
pub struct WebControl {
    element: web_sys::Element,
}

impl WebControl {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl ToggleControl for WebControl {
    fn show_glyph(&mut self, glyph: Glyph) {
        self.element.set_inner_html(glyph.icon_html());
        let _ = self.element.set_attribute("aria-label", glyph.label());
    }
}
