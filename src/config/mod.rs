//! Toggle configuration
//!
//! Every field has a default matching the page contract, so an empty
//! object (or `ToggleConfig::default()`) is a complete configuration.

use serde::Deserialize;

use crate::error::Result;

/// Storage key holding the persisted preference
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Class on the body marking dark mode (styled by the page's stylesheet)
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";

/// Element id of the toggle control
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    #[serde(default = "default_control_id")]
    pub control_id: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_marker_class() -> String {
    DEFAULT_MARKER_CLASS.to_string()
}

fn default_control_id() -> String {
    DEFAULT_CONTROL_ID.to_string()
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            marker_class: default_marker_class(),
            control_id: default_control_id(),
        }
    }
}

impl ToggleConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
