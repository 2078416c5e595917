//! End-to-end tests for the tree resolution engine.
//!
//! These tests drive whole render passes through the public API:
//! 1. Sibling keys (uniqueness, determinism, suffixes)
//! 2. Order preservation and passthrough
//! 3. Component dispatch and host fallback
//! 4. Indexed lookup (resolution and configuration errors)
//! 5. Render documents loaded from disk

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::{BTreeMap, HashSet};
use std::io::Write;

use nodetree_common::config::RenderDocument;
use nodetree_common::error::NodeTreeError;
use nodetree_common::types::{LookupCollection, Node};
use nodetree_core::{ComponentRegistry, MountRequest, Rendered, Renderer, TagComponent};
use serde_json::{Value, json};

fn keys(rendered: &Rendered) -> Vec<String> {
    rendered
        .elements()
        .iter()
        .map(|el| el.key.to_string())
        .collect()
}

fn deep_tree(depth: usize, fan_out: usize) -> Value {
    let mut node = Node::new("Leaf").prop("depth", depth).into_value();
    for level in (0..depth).rev() {
        let children: Vec<Value> = (0..fan_out).map(|_| node.clone()).collect();
        node = Node::new("Branch")
            .prop("level", level)
            .prop("children", children)
            .prop("aside", Node::new("Leaf").prop("aside", true))
            .into_value();
    }
    node
}

// ── Sibling keys ─────────────────────────────────────────────────────

#[test]
fn two_rows_render_in_order_with_plain_keys() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let rendered = renderer
        .render(&json!([{"type": "Row", "props": {}}, {"type": "Row", "props": {}}]))
        .expect("render");

    let rows = rendered.as_list().expect("list");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].as_element().expect("row").key, "Row_0");
    assert_eq!(rows[1].as_element().expect("row").key, "Row_1");
}

#[test]
fn keys_are_unique_per_type_in_a_large_tree() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let rendered = renderer.render(&deep_tree(4, 3)).expect("render");
    let all = keys(&rendered);

    let leaves = rendered
        .elements()
        .iter()
        .filter(|el| el.type_name == "Leaf")
        .count();
    assert_eq!(leaves, 81 + 40);

    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "duplicate keys in {all:?}");
}

#[test]
fn rerendering_reproduces_identical_keys() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let tree = deep_tree(3, 2);
    let first = renderer.render(&tree).expect("first pass");
    let second = renderer.render(&tree).expect("second pass");
    assert_eq!(keys(&first), keys(&second));
    assert_eq!(first, second);
}

#[test]
fn passes_on_separate_threads_do_not_share_counters() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let tree = deep_tree(3, 2);
    let expected = keys(&renderer.render(&tree).expect("render"));

    let (renderer, tree) = (&renderer, &tree);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || keys(&renderer.render(tree).expect("render"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), expected);
        }
    });
}

// ── Order and passthrough ────────────────────────────────────────────

#[test]
fn identity_mapper_behaves_like_no_mapper() {
    let tree = deep_tree(2, 2);
    let plain = Renderer::new(ComponentRegistry::new())
        .render(&tree)
        .expect("render");
    let mapped = Renderer::builder()
        .map_prop(Value::clone)
        .build()
        .render(&tree)
        .expect("render");
    assert_eq!(plain, mapped);
}

#[test]
fn non_node_values_are_returned_unchanged() {
    let renderer = Renderer::new(ComponentRegistry::new());
    for value in [
        Value::Null,
        json!(0),
        json!("label"),
        json!({"type": "Title"}),
        json!({"nested": {"type": "Title", "props": {}}}),
    ] {
        assert_eq!(
            renderer.render(&value).expect("render"),
            Rendered::Value(value.clone())
        );
    }
}

#[test]
fn nested_sequences_preserve_order() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let rendered = renderer
        .render(&json!({"type": "Table", "props": {"rows": [
            [{"type": "Cell", "props": {"v": "a"}}, {"type": "Cell", "props": {"v": "b"}}],
            [{"type": "Cell", "props": {"v": "c"}}]
        ]}}))
        .expect("render");
    let values: Vec<_> = rendered
        .elements()
        .iter()
        .filter_map(|el| el.prop("v").and_then(Rendered::as_value).cloned())
        .collect();
    assert_eq!(values, vec![json!("a"), json!("b"), json!("c")]);
}

// ── Dispatch ─────────────────────────────────────────────────────────

#[test]
fn unregistered_type_without_default_renders_host_element() {
    let renderer = Renderer::builder()
        .component("Known", TagComponent::new("div"))
        .build();
    let rendered = renderer
        .render(&json!({"type": "Brand-New", "props": {"size": 3}}))
        .expect("fallback never fails");
    let el = rendered.as_element().expect("element");
    assert_eq!(el.component, "Brand-New");
    assert_eq!(el.type_name, "Brand-New");
    assert_eq!(el.prop("size"), Some(&Rendered::Value(json!(3))));
}

#[test]
fn card_header_is_a_mounted_title() {
    let renderer = Renderer::new(ComponentRegistry::new());
    let rendered = renderer
        .render(&json!({"type": "Card", "props": {"header": {"type": "Title", "props": {"text": "Hi"}}}}))
        .expect("render");
    let header = rendered
        .as_element()
        .and_then(|card| card.prop("header"))
        .and_then(Rendered::as_element)
        .expect("header element");
    assert_eq!(header.type_name, "Title");
    assert_eq!(header.prop_key.as_deref(), Some("header"));
}

#[test]
fn components_may_wrap_their_output() {
    let renderer = Renderer::builder()
        .component("Pair", |request: MountRequest| {
            let key = request.key.to_string();
            Rendered::List(vec![
                Rendered::Value(Value::String(key)),
                Rendered::Element(request.into_element("pair")),
            ])
        })
        .build();
    let rendered = renderer
        .render(&json!({"type": "Pair", "props": {}}))
        .expect("render");
    let parts = rendered.as_list().expect("list");
    assert_eq!(parts[0], Rendered::Value(json!("Pair_0")));
    assert_eq!(parts[1].as_element().expect("element").component, "pair");
}

// ── Indexed lookup ───────────────────────────────────────────────────

#[test]
fn lookup_resolves_like_inline_node() {
    let components: LookupCollection = BTreeMap::from([(
        "Button".to_string(),
        vec![json!({"id": "save", "type": "Btn", "props": {"label": "Save"}})],
    )]);
    let renderer = Renderer::builder()
        .component("Btn", TagComponent::new("button"))
        .components(components)
        .build();

    let looked_up = renderer
        .render(&json!({"type": "ComponentLookup", "props": {"componentType": "Button", "componentIndex": 0}}))
        .expect("lookup");
    let inline = renderer
        .render(&json!({"type": "Btn", "props": {"id": "save", "label": "Save"}}))
        .expect("inline");
    assert_eq!(looked_up, inline);
}

#[test]
fn lookup_errors_are_configuration_errors() {
    let node = json!({"type": "ComponentLookup", "props": {"componentType": "Missing", "componentIndex": 0}});

    let without = Renderer::new(ComponentRegistry::new());
    let err = without.render(&node).unwrap_err();
    assert!(matches!(err, NodeTreeError::MissingLookupCollection));

    let empty = Renderer::builder().components(LookupCollection::new()).build();
    let err = empty.render(&node).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("Missing"), "got: {err}");
}

// ── Documents ────────────────────────────────────────────────────────

#[test]
fn document_from_disk_renders_with_tag_mapping() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("tempfile");
    let document = json!({
        "entry": {"type": "Toolbar", "props": {"actions": [
            {"type": "ComponentLookup", "props": {"componentType": "Button", "componentIndex": 1}},
            {"type": "ComponentLookup", "props": {"componentType": "Button", "componentIndex": 0}}
        ]}},
        "mapping": {"Btn": "button", "default": "div"},
        "components": {"Button": [
            {"id": "save", "type": "Btn", "props": {"label": "Save"}},
            {"type": "Btn", "props": {"label": "Close"}}
        ]}
    });
    write!(file, "{document}").expect("write");

    let document = RenderDocument::load(file.path(), None).expect("load");
    let renderer = Renderer::from_document(&document);
    let rendered = renderer.render(&document.entry).expect("render");

    let tags: Vec<_> = rendered
        .elements()
        .iter()
        .map(|el| (el.component.as_str(), el.key.to_string()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("div", "Toolbar_0".to_string()),
            ("button", "Btn_0".to_string()),
            ("button", "Btn_1".to_string()),
        ]
    );
    let ids: Vec<_> = rendered
        .elements()
        .iter()
        .filter_map(|el| el.prop("id").and_then(Rendered::as_value).cloned())
        .collect();
    assert_eq!(ids, vec![json!(1), json!("save")]);
}
