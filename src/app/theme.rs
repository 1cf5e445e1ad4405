//! Theme context for Dioxus-rendered pages.
//!
//! Same behavior as the page controller, but the toggle button is a
//! component and its glyph follows a signal. Storage and the body marker are
//! only touched on the client; SSR renders the light default.

use dioxus::prelude::*;

use crate::config::ToggleConfig;
use crate::theme::{compute_next_state, Glyph, ThemePreference};

#[cfg(target_arch = "wasm32")]
use crate::dom::{MarkerTarget, WebBody};
#[cfg(target_arch = "wasm32")]
use crate::store::{LocalStorageStore, PreferenceStore};
#[cfg(target_arch = "wasm32")]
use crate::theme::compute_initial_state;

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<ThemePreference>,
    config: Signal<ToggleConfig>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> ThemePreference {
        (self.current)()
    }

    /// Glyph the toggle button should show
    pub fn glyph(&self) -> Glyph {
        self.get().glyph()
    }

    pub fn control_id(&self) -> String {
        self.config.read().control_id.clone()
    }

    /// Flip the theme, apply it to the body and persist it
    pub fn toggle(&self) -> ThemePreference {
        let transition = compute_next_state(self.get());
        let mut current = self.current;
        current.set(transition.state);

        #[cfg(target_arch = "wasm32")]
        {
            let config = self.config.read();
            apply_theme_to_body(&config, transition.state);
            LocalStorageStore::new().set(&config.storage_key, transition.persisted);
        }

        tracing::debug!(theme = %transition.state, "theme toggled");
        transition.state
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(config: ToggleConfig) -> ThemeContext {
    let current = use_signal(|| ThemePreference::Light);
    let config = use_signal(move || config);

    let ctx = ThemeContext { current, config };
    use_context_provider(|| ctx);

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        let mut current = current;
        use_effect(move || {
            let config = config.read();
            let stored = LocalStorageStore::new().get(&config.storage_key);
            let (state, _) = compute_initial_state(stored.as_deref());
            current.set(state);
            apply_theme_to_body(&config, state);
        });
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_body(config: &ToggleConfig, state: ThemePreference) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let mut body = WebBody::new(body);
    if state.is_dark() {
        body.add_marker(&config.marker_class);
    } else {
        body.remove_marker(&config.marker_class);
    }
}
