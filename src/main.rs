//! Launches the Dioxus app with the theme toggle in the browser.

fn main() {
    dioxus::launch(theme_toggle::app::App);
}
