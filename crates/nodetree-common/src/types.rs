//! Domain primitive types used across the nodetree workspace.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{KEY_SEPARATOR, PROPS_FIELD, TYPE_FIELD};
use crate::error::{NodeTreeError, Result};

/// Indexed-lookup collection: `componentType` to an ordered pool of nodes.
///
/// Entries are kept as raw values so a pool entry may carry an `id` of any
/// JSON type next to its `type` and `props`.
pub type LookupCollection = BTreeMap<String, Vec<Value>>;

/// An owned renderable unit: a type tag and its props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Type tag used to pick a component implementation.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Prop values; these may themselves hold nodes.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl Node {
    /// Creates a node with no props.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            props: Map::new(),
        }
    }

    /// Adds a prop, replacing any previous value under `key`.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.props.insert(key.into(), value.into());
        self
    }

    /// Borrows this node as a [`NodeRef`].
    #[must_use]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef {
            type_name: &self.type_name,
            props: &self.props,
        }
    }

    /// Converts the node into its serialized `{type, props}` form.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut object = Map::new();
        let _ = object.insert(TYPE_FIELD.into(), Value::String(self.type_name));
        let _ = object.insert(PROPS_FIELD.into(), Value::Object(self.props));
        Value::Object(object)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.into_value()
    }
}

/// A node borrowed out of a value tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRef<'a> {
    /// Type tag.
    pub type_name: &'a str,
    /// Prop mapping.
    pub props: &'a Map<String, Value>,
}

impl<'a> NodeRef<'a> {
    /// Classifies `value`, returning the node it describes if it is one.
    ///
    /// A value is a node when it is a mapping holding both a `type` and a
    /// `props` field. Nothing else about the node schema is checked beyond
    /// what mounting needs.
    ///
    /// # Errors
    ///
    /// Returns [`NodeTreeError::MalformedNode`] if the value has both fields
    /// but `type` is not a string or `props` is not a mapping.
    pub fn classify(value: &'a Value) -> Result<Option<Self>> {
        let Value::Object(object) = value else {
            return Ok(None);
        };
        let (Some(type_value), Some(props_value)) =
            (object.get(TYPE_FIELD), object.get(PROPS_FIELD))
        else {
            return Ok(None);
        };

        let Value::String(type_name) = type_value else {
            return Err(NodeTreeError::MalformedNode {
                type_name: type_value.to_string(),
                message: "`type` must be a string".into(),
            });
        };
        let Value::Object(props) = props_value else {
            return Err(NodeTreeError::MalformedNode {
                type_name: type_name.clone(),
                message: "`props` must be a mapping".into(),
            });
        };

        Ok(Some(Self {
            type_name: type_name.as_str(),
            props,
        }))
    }
}

/// Sibling identity key of a mounted node, `<type>_<ordinal>[_<index>]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKey(String);

impl ElementKey {
    /// Builds the key for the `ordinal`-th node of `type_name` in a pass.
    ///
    /// The `_<index>` suffix is only present when the node was an element
    /// of a prop-value sequence.
    #[must_use]
    pub fn new(type_name: &str, ordinal: usize, index: Option<usize>) -> Self {
        let key = match index {
            Some(index) => format!("{type_name}{KEY_SEPARATOR}{ordinal}{KEY_SEPARATOR}{index}"),
            None => format!("{type_name}{KEY_SEPARATOR}{ordinal}"),
        };
        Self(key)
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for ElementKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
