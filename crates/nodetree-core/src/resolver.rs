//! Value classification and recursive resolution.

use std::borrow::Cow;

use nodetree_common::error::Result;
use nodetree_common::types::NodeRef;
use serde_json::Value;

use crate::element::Rendered;
use crate::renderer::RenderPass;

impl RenderPass<'_> {
    /// Resolves any value found in the tree.
    ///
    /// The configured prop mapper runs first. `null` and non-node values
    /// pass through, sequences resolve element-wise in order, and nodes are
    /// handed to the mounter.
    pub(crate) fn resolve(
        &mut self,
        value: &Value,
        prop_key: Option<&str>,
        index: Option<usize>,
    ) -> Result<Rendered> {
        let mapped = match self.renderer.map_prop.as_deref() {
            Some(map_prop) => Cow::Owned(map_prop(value)),
            None => Cow::Borrowed(value),
        };

        match mapped.as_ref() {
            Value::Null => Ok(Rendered::Value(Value::Null)),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(position, item)| self.resolve(item, prop_key, Some(position)))
                .collect::<Result<Vec<_>>>()
                .map(Rendered::List),
            other => match NodeRef::classify(other)? {
                Some(node) => self.mount(node, prop_key, index),
                None => Ok(Rendered::Value(other.clone())),
            },
        }
    }
}
