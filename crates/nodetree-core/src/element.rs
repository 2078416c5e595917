//! Render output: resolved values and component instantiation requests.

use indexmap::IndexMap;
use nodetree_common::types::ElementKey;
use serde::Serialize;
use serde_json::Value;

/// Resolved props of a mounted node, in declaration order.
pub type Props = IndexMap<String, Rendered>;

/// Result of resolving any value in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// A mounted node.
    Element(Element),
    /// A resolved sequence, in input order.
    List(Vec<Rendered>),
    /// A scalar, `null`, or non-node mapping passed through verbatim.
    Value(Value),
}

impl Rendered {
    /// Returns the mounted element, if this is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the resolved sequence, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the passthrough value, if this is one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for a passed-through `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Visits every element depth-first, parents before their props.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        match self {
            Self::Element(element) => {
                visit(element);
                for prop in element.props.values() {
                    prop.walk(visit);
                }
            }
            Self::List(items) => {
                for item in items {
                    item.walk(visit);
                }
            }
            Self::Value(_) => {}
        }
    }

    /// Collects every element depth-first.
    #[must_use]
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| found.push(element));
        found
    }
}

impl From<Element> for Rendered {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Value> for Rendered {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// A component instantiation request, as handed to the host UI model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Host tag or component name that produced this element.
    pub component: String,
    /// Sibling identity key, unique per type within a render pass.
    pub key: ElementKey,
    /// Node `type` as declared in the tree.
    #[serde(rename = "_type")]
    pub type_name: String,
    /// Prop under which the node was found, if any.
    #[serde(rename = "propKey", skip_serializing_if = "Option::is_none")]
    pub prop_key: Option<String>,
    /// Position within the enclosing sequence, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Fully resolved props.
    pub props: Props,
}

impl Element {
    /// Looks up a resolved prop.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Rendered> {
        self.props.get(name)
    }
}

/// Arguments for instantiating one node: resolved props plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MountRequest {
    /// Sibling identity key.
    pub key: ElementKey,
    /// Node `type` as declared in the tree.
    pub type_name: String,
    /// Prop under which the node was found, if any.
    pub prop_key: Option<String>,
    /// Position within the enclosing sequence, if any.
    pub index: Option<usize>,
    /// Fully resolved props.
    pub props: Props,
}

impl MountRequest {
    /// Turns the request into an element rendered as `component`.
    #[must_use]
    pub fn into_element(self, component: impl Into<String>) -> Element {
        Element {
            component: component.into(),
            key: self.key,
            type_name: self.type_name,
            prop_key: self.prop_key,
            index: self.index,
            props: self.props,
        }
    }

    /// Turns the request into a generic host element named after its type.
    #[must_use]
    pub fn into_host_element(self) -> Element {
        let tag = self.type_name.clone();
        self.into_element(tag)
    }
}
