//! Generator configuration.
//!
//! Reads an optional TOML file; every field falls back to its default, so an
//! empty or missing file yields the stock marker names and emission shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder replaced by the type text in [`GeneratorConfig::lookup`].
pub const TYPE_PLACEHOLDER: &str = "{type}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Marker requesting accessors for every required type.
    pub group_marker: String,

    /// Marker customizing the accessor for one type.
    pub override_marker: String,

    /// Dependency-requirement marker, read from containers and synthesized for overrides.
    pub requirement_marker: String,

    /// Visibility used when a marker omits one or passes a non-literal.
    pub default_visibility: String,

    /// Registry lookup expression; `{type}` is replaced by the type text.
    pub lookup: String,

    /// Appended to the container's simple name to form the registration name.
    pub output_suffix: String,

    /// Treat warning diagnostics as errors when deciding suppression.
    pub warnings_as_errors: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            group_marker: "RequireComponentGetters".to_string(),
            override_marker: "RequireComponentGetter".to_string(),
            requirement_marker: "RequireComponent".to_string(),
            default_visibility: "public".to_string(),
            lookup: "GetComponent<{type}>()".to_string(),
            output_suffix: ".Getters.g.cs".to_string(),
            warnings_as_errors: false,
        }
    }
}

impl GeneratorConfig {
    /// Load config from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render the registry lookup for one type.
    pub fn lookup_for(&self, ty: &str) -> String {
        self.lookup.replace(TYPE_PLACEHOLDER, ty)
    }

    /// Registration name for a container's generated source.
    pub fn output_name(&self, container_name: &str) -> String {
        format!("{}{}", container_name, self.output_suffix)
    }
}
