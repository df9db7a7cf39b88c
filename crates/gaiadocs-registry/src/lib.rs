//! Component registry manifest.
//!
//! The registry is a static JSON document (`registry.json`) enumerating
//! every shippable UI component with its metadata and package dependencies.
//! It is authored externally, consumed read-only by the docs pipeline (page
//! resolution and sitemap generation) and by the package-install CLI.
//!
//! Manifest shape:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "name": "raised-button",
//!       "title": "Raised Button",
//!       "description": "A button with tactile depth.",
//!       "dependencies": ["@radix-ui/react-slot"]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One installable component in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegistryItem {
    /// Component slug (matches `/docs/components/<name>`).
    pub name: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// npm package dependencies.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// The parsed component registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Registry {
    items: Vec<RegistryItem>,
}

/// Error loading the registry manifest.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Manifest file could not be read.
    #[error("Failed to read registry {}: {source}", .path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Manifest is not valid JSON of the expected shape.
    #[error("Invalid registry manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Registry {
    /// Parse a registry from JSON text.
    ///
    /// Unknown keys are ignored; `dependencies` defaults to empty.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON. The manifest
    /// ships with the site, so this is a configuration error, not a
    /// runtime condition.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a registry from a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read and
    /// [`RegistryError::Parse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Look up a component by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// All registry items in manifest order.
    #[must_use]
    pub fn items(&self) -> &[RegistryItem] {
        &self.items
    }
}
