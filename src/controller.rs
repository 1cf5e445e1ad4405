//! Theme toggle controller
//!
//! Keeps three things in step: the marker class on the body, the glyph on
//! the toggle control, and the preference in storage. Storage is read once
//! by [`ThemeToggleController::initialize`] and written on every click.

use crate::config::ToggleConfig;
use crate::dom::{MarkerTarget, ToggleControl};
use crate::store::PreferenceStore;
use crate::theme::{compute_initial_state, compute_next_state, Glyph, ThemePreference};

pub struct ThemeToggleController<S, B, C> {
    store: S,
    body: B,
    /// The page may omit the control; icon updates are then skipped.
    control: Option<C>,
    config: ToggleConfig,
}

impl<S, B, C> ThemeToggleController<S, B, C>
where
    S: PreferenceStore,
    B: MarkerTarget,
    C: ToggleControl,
{
    pub fn new(store: S, body: B, control: Option<C>, config: ToggleConfig) -> Self {
        Self {
            store,
            body,
            control,
            config,
        }
    }

    /// Apply the stored preference to the page. Does not write storage.
    pub fn initialize(&mut self) -> ThemePreference {
        let persisted = self.store.get(&self.config.storage_key);
        let (state, glyph) = compute_initial_state(persisted.as_deref());

        self.apply_marker(state);
        self.show_glyph(glyph);

        tracing::debug!(
            stored = persisted.as_deref().unwrap_or("<none>"),
            theme = %state,
            "theme initialized"
        );
        state
    }

    /// Flip the theme, update the icon and persist the result.
    pub fn on_toggle_click(&mut self) -> ThemePreference {
        let transition = compute_next_state(self.current());

        let now_dark = self.body.toggle_marker(&self.config.marker_class);
        debug_assert_eq!(now_dark, transition.state.is_dark());
        self.show_glyph(transition.glyph);
        self.store
            .set(&self.config.storage_key, transition.persisted);

        tracing::debug!(theme = %transition.state, "theme toggled");
        transition.state
    }

    /// Theme currently shown, read back from the body marker
    pub fn current(&self) -> ThemePreference {
        if self.body.has_marker(&self.config.marker_class) {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    fn apply_marker(&mut self, state: ThemePreference) {
        let marker = &self.config.marker_class;
        if state.is_dark() {
            self.body.add_marker(marker);
        } else {
            self.body.remove_marker(marker);
        }
    }

    fn show_glyph(&mut self, glyph: Glyph) {
        if let Some(control) = self.control.as_mut() {
            control.show_glyph(glyph);
        }
    }
}
