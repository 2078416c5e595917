//! Reserved names and field constants.

/// Reserved `type` of the built-in indexed-lookup adapter.
pub const LOOKUP_TYPE: &str = "ComponentLookup";

/// Mapping key naming the fallback component of a registry.
pub const DEFAULT_MAPPING_KEY: &str = "default";

/// Separator between the parts of a generated sibling key.
pub const KEY_SEPARATOR: char = '_';

/// Field carrying a node's type tag.
pub const TYPE_FIELD: &str = "type";

/// Field carrying a node's prop mapping.
pub const PROPS_FIELD: &str = "props";

/// Field carrying a lookup-collection entry's declared identifier.
pub const ID_FIELD: &str = "id";

/// Lookup prop naming the collection to read from.
pub const COMPONENT_TYPE_PROP: &str = "componentType";

/// Lookup prop giving the position within the named collection.
pub const COMPONENT_INDEX_PROP: &str = "componentIndex";

/// Lookup prop forwarded into the looked-up node's props.
pub const PROP_INDEX_PROP: &str = "propIndex";

/// File extensions recognized as YAML render documents.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
