//! Render-document configuration model.
//!
//! A render document bundles everything one render pass reads: the entry
//! value, the type-to-tag mapping, and the optional lookup collection. It is
//! what callers keep on disk as JSON or YAML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_MAPPING_KEY, YAML_EXTENSIONS};
use crate::error::{NodeTreeError, Result};
use crate::types::LookupCollection;

/// Serialized form of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// JSON text.
    #[default]
    Json,
    /// YAML text.
    Yaml,
}

impl DocumentFormat {
    /// Picks a format from a file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_yaml { Self::Yaml } else { Self::Json }
    }
}

/// Everything needed to render one tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderDocument {
    /// Root value of the tree; a node or any plain value.
    pub entry: Value,
    /// Node `type` to host tag name. The `default` key is the fallback.
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
    /// Indexed-lookup collection, if lookup nodes are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<LookupCollection>,
}

impl RenderDocument {
    /// Parses a document from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        let document: Self = match format {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(document)
    }

    /// Reads and parses a document, picking the format from the extension
    /// unless `format` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, format: Option<DocumentFormat>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| NodeTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = format.unwrap_or_else(|| DocumentFormat::from_path(path));
        Self::parse(&text, format)
    }

    /// Returns the fallback tag, if the mapping declares one.
    #[must_use]
    pub fn default_tag(&self) -> Option<&str> {
        self.mapping.get(DEFAULT_MAPPING_KEY).map(String::as_str)
    }

    /// Iterates the explicit `type` to tag entries, excluding `default`.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping
            .iter()
            .filter(|(type_name, _)| type_name.as_str() != DEFAULT_MAPPING_KEY)
            .map(|(type_name, tag)| (type_name.as_str(), tag.as_str()))
    }
}
