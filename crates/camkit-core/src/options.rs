//! Configuration options for camkit.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Global configuration options for camkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// When viewport-derived defaults are read.
    pub defaults_policy: DefaultsPolicy,

    /// Whether merged parameters are checked before a camera is built.
    ///
    /// When disabled, degenerate planes are passed to the native camera as-is.
    pub validate_params: bool,

    /// Whether a newly registered camera becomes the active camera.
    pub activate_on_register: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            defaults_policy: DefaultsPolicy::Snapshot,
            validate_params: true,
            activate_on_register: true,
        }
    }
}

impl Options {
    /// Parses options from a JSON string. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json_str(&contents)?;
        log::debug!("loaded options from {}", path.as_ref().display());
        Ok(options)
    }
}

/// When camera defaults read the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefaultsPolicy {
    /// Read once when the defaults provider is created. Later resizes are not
    /// seen until the provider is refreshed.
    #[default]
    Snapshot,
    /// Read every time defaults are requested.
    Live,
}
