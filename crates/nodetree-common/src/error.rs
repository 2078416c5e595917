//! Unified error types for the nodetree workspace.
//!
//! Lookup failures are configuration errors: they abort the render pass and
//! reach the caller untouched. Unknown component types are not errors at all.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NodeTreeError {
    /// A lookup node was rendered but no lookup collection was supplied.
    #[error(
        "found a `ComponentLookup` node but no lookup collection is configured; supply `components` to use lookup nodes"
    )]
    MissingLookupCollection,

    /// A lookup node names a collection the caller did not supply.
    #[error("found `{component_type}` lookup, but it is not defined in the lookup collection")]
    UnknownLookupType {
        /// The `componentType` the lookup node asked for.
        component_type: String,
    },

    /// A lookup node addresses a position past the end of its collection.
    #[error("lookup `{component_type}[{index}]` is out of range (collection holds {len})")]
    LookupIndexOutOfRange {
        /// Collection the lookup node addressed.
        component_type: String,
        /// Requested position.
        index: usize,
        /// Number of entries in the collection.
        len: usize,
    },

    /// A lookup collection entry resolves back into itself.
    #[error("lookup `{component_type}[{index}]` refers back to itself")]
    LookupCycle {
        /// Collection of the entry that closed the cycle.
        component_type: String,
        /// Position of that entry.
        index: usize,
    },

    /// A value shaped like a node could not be mounted.
    #[error("malformed node `{type_name}`: {message}")]
    MalformedNode {
        /// Type tag of the offending node, as far as it could be read.
        type_name: String,
        /// What was wrong with it.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// YAML deserialization failed.
    #[error("YAML error: {source}")]
    Yaml {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },
}

impl NodeTreeError {
    /// Returns `true` for caller misconfiguration that aborts a render pass.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingLookupCollection
                | Self::UnknownLookupType { .. }
                | Self::LookupIndexOutOfRange { .. }
                | Self::LookupCycle { .. }
        )
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NodeTreeError>;
