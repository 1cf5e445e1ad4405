//! Light/dark toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Toggle button showing the glyph for the next theme.
///
/// Needs [`use_theme_provider`](crate::app::theme::use_theme_provider) higher
/// in the tree. Don't combine with `web::attach` on the same page, or each
/// click is handled twice.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let glyph = theme.glyph();
    let control_id = theme.control_id();

    rsx! {
        button {
            id: "{control_id}",
            class: "theme-toggle",
            r#type: "button",
            "aria-label": glyph.label(),
            onclick: move |_| {
                theme.toggle();
            },
            dangerous_inner_html: glyph.icon_html(),
        }
    }
}
