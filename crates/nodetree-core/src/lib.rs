//! # nodetree-core
//!
//! Tree resolution engine for serialized UI trees.
//!
//! Walks a `serde_json::Value` graph of `{type, props}` nodes and turns it
//! into component instantiation requests:
//! - **Resolver**: classifies any value and recurses into sequences and nodes.
//! - **Mount**: resolves a node's props, assigns its sibling key, and picks
//!   its component.
//! - **Lookup**: the built-in `ComponentLookup` node, which mounts an entry
//!   of a caller-supplied collection addressed by type and position.
//! - **Key**: per-pass ordinal counters behind the sibling keys.
//! - **Registry**: the [`Component`](registry::Component) trait and the
//!   caller's type-to-component mapping.
//!
//! # Example
//!
//! ```rust
//! use nodetree_core::registry::TagComponent;
//! use nodetree_core::renderer::Renderer;
//! use serde_json::json;
//!
//! let renderer = Renderer::builder()
//!     .component("Title", TagComponent::new("h1"))
//!     .build();
//!
//! let rendered = renderer
//!     .render(&json!({"type": "Card", "props": {
//!         "header": {"type": "Title", "props": {"text": "Hi"}}
//!     }}))
//!     .expect("no lookup nodes, nothing to misconfigure");
//!
//! let keys: Vec<String> = rendered.elements().iter().map(|el| el.key.to_string()).collect();
//! assert_eq!(keys, ["Card_0", "Title_0"]);
//! ```

pub mod element;
pub mod key;
mod lookup;
mod mount;
pub mod registry;
pub mod renderer;
mod resolver;

pub use element::{Element, MountRequest, Props, Rendered};
pub use registry::{Component, ComponentRegistry, TagComponent};
pub use renderer::{Renderer, RendererBuilder};
