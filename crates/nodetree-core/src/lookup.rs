//! Indexed-lookup adapter.
//!
//! A `ComponentLookup` node addresses an entry of the caller's lookup
//! collection by `componentType` and `componentIndex` instead of carrying the
//! node inline. The entry is mounted as an ordinary node with `id` and
//! `propIndex` injected into its props; the entry's own props win on
//! collision.

use nodetree_common::constants::{
    COMPONENT_INDEX_PROP, COMPONENT_TYPE_PROP, ID_FIELD, LOOKUP_TYPE, PROP_INDEX_PROP,
    PROPS_FIELD, TYPE_FIELD,
};
use nodetree_common::error::{NodeTreeError, Result};
use nodetree_common::types::Node;
use serde_json::Value;

use crate::element::{MountRequest, Rendered};
use crate::renderer::RenderPass;

/// Where a lookup node points.
#[derive(Debug, Clone, PartialEq)]
struct LookupTarget<'a> {
    component_type: &'a str,
    component_index: usize,
    prop_index: Option<Value>,
}

impl<'a> LookupTarget<'a> {
    /// Reads the target from a lookup node's resolved props.
    ///
    /// Without a declared `propIndex`, the lookup node's own sequence
    /// position is forwarded.
    fn from_request(request: &'a MountRequest) -> Result<Self> {
        let component_type = match request.props.get(COMPONENT_TYPE_PROP) {
            Some(Rendered::Value(Value::String(component_type))) => component_type.as_str(),
            _ => return Err(malformed_lookup("`componentType` must be a string")),
        };

        let component_index = match request.props.get(COMPONENT_INDEX_PROP) {
            Some(Rendered::Value(value)) => value.as_u64().and_then(|n| usize::try_from(n).ok()),
            _ => None,
        }
        .ok_or_else(|| malformed_lookup("`componentIndex` must be a non-negative integer"))?;

        let prop_index = match request.props.get(PROP_INDEX_PROP) {
            Some(Rendered::Value(value)) => Some(value.clone()),
            Some(_) => return Err(malformed_lookup("`propIndex` must be a plain value")),
            None => request.index.map(Value::from),
        };

        Ok(Self {
            component_type,
            component_index,
            prop_index,
        })
    }

    /// Builds the node to mount from a collection entry.
    fn synthesize(&self, entry: &Value) -> Result<Node> {
        let malformed = |message: &str| NodeTreeError::MalformedNode {
            type_name: format!("{}[{}]", self.component_type, self.component_index),
            message: message.to_owned(),
        };

        let object = entry
            .as_object()
            .ok_or_else(|| malformed("lookup entry must be a mapping"))?;
        let type_name = object
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("lookup entry needs a string `type`"))?;

        let id = object
            .get(ID_FIELD)
            .filter(|id| !id.is_null())
            .cloned()
            .unwrap_or_else(|| Value::from(self.component_index));
        let mut node = Node::new(type_name).prop(ID_FIELD, id);
        if let Some(prop_index) = &self.prop_index {
            node = node.prop(PROP_INDEX_PROP, prop_index.clone());
        }

        match object.get(PROPS_FIELD) {
            Some(Value::Object(props)) => node.props.extend(props.clone()),
            None | Some(Value::Null) => {}
            Some(_) => return Err(malformed("`props` must be a mapping")),
        }
        Ok(node)
    }
}

fn malformed_lookup(message: &str) -> NodeTreeError {
    NodeTreeError::MalformedNode {
        type_name: LOOKUP_TYPE.to_owned(),
        message: message.to_owned(),
    }
}

impl RenderPass<'_> {
    /// Mounts the collection entry a lookup node points at.
    ///
    /// The entry goes straight to the mounter with no `propKey` or `index`.
    pub(crate) fn mount_lookup(&mut self, request: MountRequest) -> Result<Rendered> {
        let renderer = self.renderer;
        let Some(collection) = renderer.components.as_ref() else {
            tracing::error!(key = %request.key, "lookup node rendered without a lookup collection");
            return Err(NodeTreeError::MissingLookupCollection);
        };

        let target = LookupTarget::from_request(&request)?;
        let Some(pool) = collection.get(target.component_type) else {
            tracing::error!(
                component_type = target.component_type,
                "lookup names a collection that was not supplied"
            );
            return Err(NodeTreeError::UnknownLookupType {
                component_type: target.component_type.to_owned(),
            });
        };

        let entry = pool
            .get(target.component_index)
            .ok_or_else(|| NodeTreeError::LookupIndexOutOfRange {
                component_type: target.component_type.to_owned(),
                index: target.component_index,
                len: pool.len(),
            })?;

        let is_active = self
            .active_lookups
            .iter()
            .any(|(t, i)| t == target.component_type && *i == target.component_index);
        if is_active {
            tracing::error!(
                component_type = target.component_type,
                component_index = target.component_index,
                "lookup entry refers back to itself"
            );
            return Err(NodeTreeError::LookupCycle {
                component_type: target.component_type.to_owned(),
                index: target.component_index,
            });
        }

        let node = target.synthesize(entry)?;
        tracing::trace!(
            component_type = target.component_type,
            component_index = target.component_index,
            type_name = %node.type_name,
            "resolved lookup"
        );
        self.active_lookups
            .push((target.component_type.to_owned(), target.component_index));
        let rendered = self.mount(node.as_node_ref(), None, None);
        let _ = self.active_lookups.pop();
        rendered
    }
}
