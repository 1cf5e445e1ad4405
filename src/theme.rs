//! Theme preference model and the pure state transitions.
//!
//! Nothing here touches the browser. The controller and the Dioxus context
//! both drive these functions and apply the result through their adapters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Persisted theme preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Glyph for the action offered while this theme is active
    pub fn glyph(&self) -> Glyph {
        match self {
            ThemePreference::Light => Glyph::Moon,
            ThemePreference::Dark => Glyph::Sun,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Icon on the toggle control. Always advertises the next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// "Switch to dark", shown while light
    Moon,
    /// "Switch to light", shown while dark
    Sun,
}

impl Glyph {
    /// Font Awesome markup rendered inside the toggle control
    pub fn icon_html(&self) -> &'static str {
        match self {
            Glyph::Moon => r#"<i class="fas fa-moon"></i>"#,
            Glyph::Sun => r#"<i class="fas fa-sun"></i>"#,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Glyph::Moon => "Switch to dark mode",
            Glyph::Sun => "Switch to light mode",
        }
    }
}

/// Outcome of a click on the toggle control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: ThemePreference,
    pub glyph: Glyph,
    /// Value written back to storage
    pub persisted: &'static str,
}

/// Visual state and icon for a page load with the given stored value.
pub fn compute_initial_state(persisted: Option<&str>) -> (ThemePreference, Glyph) {
    let state = persisted.map(ThemePreference::parse).unwrap_or_default();
    (state, state.glyph())
}

/// State after one click starting from `current`.
pub fn compute_next_state(current: ThemePreference) -> Transition {
    let state = current.toggled();
    Transition {
        state,
        glyph: state.glyph(),
        persisted: state.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_defaults_to_light() {
        assert_eq!(compute_initial_state(None), (ThemePreference::Light, Glyph::Moon));
    }

    #[test]
    fn test_only_exact_dark_is_dark() {
        assert_eq!(
            compute_initial_state(Some("dark")),
            (ThemePreference::Dark, Glyph::Sun)
        );
        for value in ["light", "", "Dark", "DARK", " dark", "oled", "system"] {
            assert_eq!(
                compute_initial_state(Some(value)).0,
                ThemePreference::Light,
                "{value:?} should fall back to light"
            );
        }
    }

    #[test]
    fn test_next_state_flips_and_persists() {
        let t = compute_next_state(ThemePreference::Light);
        assert_eq!(t.state, ThemePreference::Dark);
        assert_eq!(t.glyph, Glyph::Sun);
        assert_eq!(t.persisted, "dark");

        let t = compute_next_state(ThemePreference::Dark);
        assert_eq!(t.state, ThemePreference::Light);
        assert_eq!(t.glyph, Glyph::Moon);
        assert_eq!(t.persisted, "light");
    }

    #[test]
    fn test_icon_markup() {
        assert_eq!(Glyph::Moon.icon_html(), r#"<i class="fas fa-moon"></i>"#);
        assert_eq!(Glyph::Sun.icon_html(), r#"<i class="fas fa-sun"></i>"#);
    }

    #[test]
    fn test_serde_uses_storage_strings() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemePreference::Light);
    }

    #[test]
    fn test_from_str_never_fails() {
        let t: ThemePreference = "garbage".parse().unwrap();
        assert_eq!(t, ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
