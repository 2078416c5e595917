//! Component registries.
//!
//! Mounting picks an implementation for a node `type` in three steps: the
//! built-in set, then an exact match in the caller's registry, then the
//! caller's `default`. When all three miss, the node becomes a generic host
//! element named after its type.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use nodetree_common::config::RenderDocument;
use nodetree_common::constants::{DEFAULT_MAPPING_KEY, LOOKUP_TYPE};

use crate::element::{MountRequest, Rendered};

/// Anything that can turn a mount request into render output.
pub trait Component: Send + Sync {
    /// Instantiates the component with resolved props and metadata.
    fn instantiate(&self, request: MountRequest) -> Rendered;
}

impl<F> Component for F
where
    F: Fn(MountRequest) -> Rendered + Send + Sync,
{
    fn instantiate(&self, request: MountRequest) -> Rendered {
        self(request)
    }
}

/// Renders every request as an element with a fixed host tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagComponent {
    tag: String,
}

impl TagComponent {
    /// Creates a component rendering as `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Returns the host tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Component for TagComponent {
    fn instantiate(&self, request: MountRequest) -> Rendered {
        Rendered::Element(request.into_element(self.tag.clone()))
    }
}

/// Types handled by the engine itself, ahead of any caller registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Indexed-lookup adapter: mounts a node drawn from the lookup collection.
    ComponentLookup,
}

impl Builtin {
    /// Every built-in, in precedence order.
    pub const ALL: [Self; 1] = [Self::ComponentLookup];

    /// Returns the built-in reserved under `type_name`, if any.
    #[must_use]
    pub fn from_type(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.type_name() == type_name)
    }

    /// Reserved `type` of this built-in.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::ComponentLookup => LOOKUP_TYPE,
        }
    }
}

/// Implementation chosen for one node `type`.
#[derive(Clone, Copy)]
pub enum Implementation<'r> {
    /// Handled by the engine.
    Builtin(Builtin),
    /// A registered or default component.
    Component(&'r dyn Component),
    /// Nothing registered; render as a generic host element.
    Host,
}

impl fmt::Debug for Implementation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Component(_) => f.write_str("Component"),
            Self::Host => f.write_str("Host"),
        }
    }
}

/// Caller-supplied mapping from node `type` to component, with an optional
/// fallback. Read-only while a pass runs.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, Arc<dyn Component>>,
    fallback: Option<Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry of [`TagComponent`]s from a document's mapping.
    ///
    /// The mapping's `default` tag becomes the fallback.
    #[must_use]
    pub fn from_document(document: &RenderDocument) -> Self {
        let registry = document
            .tags()
            .fold(Self::new(), |registry, (type_name, tag)| {
                registry.with(type_name, TagComponent::new(tag))
            });
        match document.default_tag() {
            Some(tag) => registry.with_default(TagComponent::new(tag)),
            None => registry,
        }
    }

    /// Registers `component` for `type_name`, returning what it replaced.
    ///
    /// Registering under `default` sets the fallback.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        component: impl Component + 'static,
    ) -> Option<Arc<dyn Component>> {
        let type_name = type_name.into();
        let component: Arc<dyn Component> = Arc::new(component);
        if type_name == DEFAULT_MAPPING_KEY {
            self.fallback.replace(component)
        } else {
            self.entries.insert(type_name, component)
        }
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, type_name: impl Into<String>, component: impl Component + 'static) -> Self {
        let _ = self.register(type_name, component);
        self
    }

    /// Sets the fallback used when no entry matches.
    #[must_use]
    pub fn with_default(mut self, component: impl Component + 'static) -> Self {
        self.fallback = Some(Arc::new(component));
        self
    }

    /// Returns the component registered for exactly `type_name`.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&dyn Component> {
        self.entries.get(type_name).map(|component| &**component)
    }

    /// Returns the fallback component.
    #[must_use]
    pub fn default_component(&self) -> Option<&dyn Component> {
        self.fallback.as_deref()
    }

    /// Number of explicitly registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no type is registered and there is no fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.fallback.is_none()
    }

    /// Picks the implementation for `type_name`.
    #[must_use]
    pub fn implementation_for(&self, type_name: &str) -> Implementation<'_> {
        if let Some(builtin) = Builtin::from_type(type_name) {
            return Implementation::Builtin(builtin);
        }
        self.get(type_name)
            .or_else(|| self.default_component())
            .map_or(Implementation::Host, Implementation::Component)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        types.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("types", &types)
            .field("has_default", &self.fallback.is_some())
            .finish()
    }
}
