//! Render entry point and the per-pass context.

use std::fmt;

use nodetree_common::config::RenderDocument;
use nodetree_common::error::Result;
use nodetree_common::types::LookupCollection;
use serde_json::Value;

use crate::element::Rendered;
use crate::key::KeyCounter;
use crate::registry::{Component, ComponentRegistry};

/// Transform applied to every value before it is classified.
pub type PropMapper = dyn Fn(&Value) -> Value + Send + Sync;

/// Resolves serialized node trees into render output.
///
/// A renderer only holds caller-owned, read-only inputs. Every call to
/// [`render`](Self::render) is an independent pass with its own key counter,
/// so a shared renderer can serve overlapping passes.
pub struct Renderer {
    pub(crate) registry: ComponentRegistry,
    pub(crate) components: Option<LookupCollection>,
    pub(crate) map_prop: Option<Box<PropMapper>>,
}

impl Renderer {
    /// Creates a renderer over `registry` with no lookup collection.
    #[must_use]
    pub const fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            components: None,
            map_prop: None,
        }
    }

    /// Starts a [`RendererBuilder`].
    #[must_use]
    pub fn builder() -> RendererBuilder {
        RendererBuilder::default()
    }

    /// Creates a renderer from a document's mapping and lookup collection.
    #[must_use]
    pub fn from_document(document: &RenderDocument) -> Self {
        Self {
            registry: ComponentRegistry::from_document(document),
            components: document.components.clone(),
            map_prop: None,
        }
    }

    /// Returns the component registry.
    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Returns the lookup collection, if one was supplied.
    #[must_use]
    pub const fn components(&self) -> Option<&LookupCollection> {
        self.components.as_ref()
    }

    /// Resolves `entry` into fully mounted output.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a lookup node cannot be satisfied,
    /// or [`MalformedNode`](nodetree_common::error::NodeTreeError::MalformedNode)
    /// for node-shaped values that cannot be mounted. No partial output is
    /// returned on error.
    pub fn render(&self, entry: &Value) -> Result<Rendered> {
        let mut pass = RenderPass::new(self);
        tracing::debug!("render pass started");
        let rendered = pass.resolve(entry, None, None)?;
        tracing::debug!(mounted = pass.counter.total(), "render pass finished");
        Ok(rendered)
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("registry", &self.registry)
            .field("components", &self.components)
            .field("map_prop", &self.map_prop.is_some())
            .finish()
    }
}

/// Fluent configuration for a [`Renderer`].
#[derive(Default)]
pub struct RendererBuilder {
    registry: ComponentRegistry,
    components: Option<LookupCollection>,
    map_prop: Option<Box<PropMapper>>,
}

impl RendererBuilder {
    /// Replaces the component registry.
    #[must_use]
    pub fn mapping(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registers a component for one type.
    #[must_use]
    pub fn component(
        mut self,
        type_name: impl Into<String>,
        component: impl Component + 'static,
    ) -> Self {
        self.registry = self.registry.with(type_name, component);
        self
    }

    /// Sets the fallback component.
    #[must_use]
    pub fn default_component(mut self, component: impl Component + 'static) -> Self {
        self.registry = self.registry.with_default(component);
        self
    }

    /// Supplies the indexed-lookup collection.
    #[must_use]
    pub fn components(mut self, components: LookupCollection) -> Self {
        self.components = Some(components);
        self
    }

    /// Sets the transform applied to every value before classification.
    #[must_use]
    pub fn map_prop<F>(mut self, map_prop: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.map_prop = Some(Box::new(map_prop));
        self
    }

    /// Builds the renderer.
    #[must_use]
    pub fn build(self) -> Renderer {
        Renderer {
            registry: self.registry,
            components: self.components,
            map_prop: self.map_prop,
        }
    }
}

impl fmt::Debug for RendererBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererBuilder")
            .field("registry", &self.registry)
            .field("components", &self.components)
            .field("map_prop", &self.map_prop.is_some())
            .finish()
    }
}

/// State of one render pass.
///
/// Resolution and mounting are implemented on this type across the
/// `resolver`, `mount`, and `lookup` modules.
pub(crate) struct RenderPass<'r> {
    pub(crate) renderer: &'r Renderer,
    pub(crate) counter: KeyCounter,
    /// Lookup entries currently being mounted, outermost first.
    pub(crate) active_lookups: Vec<(String, usize)>,
}

impl<'r> RenderPass<'r> {
    pub(crate) fn new(renderer: &'r Renderer) -> Self {
        Self {
            renderer,
            counter: KeyCounter::new(),
            active_lookups: Vec::new(),
        }
    }
}
