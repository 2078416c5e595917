//! Node mounting: prop resolution, key assignment, component dispatch.

use nodetree_common::error::Result;
use nodetree_common::types::NodeRef;
use serde_json::{Map, Value};

use crate::element::{MountRequest, Props, Rendered};
use crate::registry::{Builtin, Implementation};
use crate::renderer::RenderPass;

impl RenderPass<'_> {
    /// Mounts a confirmed node.
    ///
    /// The key is drawn before the props are resolved, so a node's ordinal
    /// precedes those of its descendants of the same type. The `_<index>`
    /// suffix is only added for nodes found inside a prop-value sequence.
    pub(crate) fn mount(
        &mut self,
        node: NodeRef<'_>,
        prop_key: Option<&str>,
        index: Option<usize>,
    ) -> Result<Rendered> {
        let key_index = prop_key.and(index);
        let key = self.counter.next_key(node.type_name, key_index);
        tracing::trace!(type_name = node.type_name, %key, "mounting node");

        let props = self.resolve_props(node.props)?;
        let request = MountRequest {
            key,
            type_name: node.type_name.to_owned(),
            prop_key: prop_key.map(str::to_owned),
            index,
            props,
        };

        let renderer = self.renderer;
        match renderer.registry.implementation_for(node.type_name) {
            Implementation::Builtin(Builtin::ComponentLookup) => self.mount_lookup(request),
            Implementation::Component(component) => Ok(component.instantiate(request)),
            Implementation::Host => {
                tracing::debug!(
                    type_name = node.type_name,
                    "no component registered, rendering host element"
                );
                Ok(Rendered::Element(request.into_host_element()))
            }
        }
    }

    fn resolve_props(&mut self, props: &Map<String, Value>) -> Result<Props> {
        let mut resolved = Props::new();
        for (name, value) in props {
            let _ = resolved.insert(name.clone(), self.resolve(value, Some(name.as_str()), None)?);
        }
        Ok(resolved)
    }
}
