//! Edge case tests for fos-dom
//!
//! Boundary conditions of the tree, style surface and event dispatch.

use fos_dom::{
    DomError, DomTree, Event, KeyboardEvent, Listener, NodeId, SharedDocument, StyleDeclaration,
};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// DOM TREE EDGE CASES
// ============================================================================

#[test]
fn test_tree_starts_with_document_node() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(tree.get(tree.root()).is_some());
    assert_eq!(tree.children(tree.root()).count(), 0);
}

#[test]
fn test_tree_unknown_ids() {
    let mut tree = DomTree::new();
    let ghost = NodeId::NONE;

    assert!(tree.get(ghost).is_none());
    assert_eq!(tree.children(ghost).count(), 0);
    assert_eq!(tree.append_child(tree.root(), ghost), Err(DomError::NotFound(ghost)));
    assert_eq!(tree.clone_node(ghost, true), Err(DomError::NotFound(ghost)));
}

#[test]
fn test_document_node_cannot_be_cloned_or_appended() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");

    assert_eq!(tree.clone_node(NodeId::ROOT, false), Err(DomError::InvalidNodeType(NodeId::ROOT)));
    assert!(tree.append_child(div, NodeId::ROOT).is_err());
}

#[test]
fn test_tree_deep_nesting() {
    let mut tree = DomTree::new();
    let mut parent = tree.root();
    let mut last = parent;
    for _ in 0..500 {
        let child = tree.create_element("div");
        tree.append_child(parent, child).unwrap();
        parent = child;
        last = child;
    }

    assert!(tree.is_connected(last));
    let copy = tree.clone_node(tree.children(tree.root()).next().unwrap().0, true).unwrap();
    assert!(!tree.is_connected(copy));
    assert_eq!(tree.len(), 1 + 500 * 2);
}

#[test]
fn test_fragment_appended_twice_is_empty_second_time() {
    let mut tree = DomTree::new();
    let frag = tree.create_fragment();
    let item = tree.create_element("li");
    tree.append_child(frag, item).unwrap();

    let first = tree.create_element("ul");
    let second = tree.create_element("ul");
    tree.append_child(first, frag).unwrap();
    tree.append_child(second, frag).unwrap();

    assert_eq!(tree.parent(item), Some(first));
    assert_eq!(tree.children(second).count(), 0);
}

// ============================================================================
// STYLE EDGE CASES
// ============================================================================

#[test]
fn test_style_whitespace_and_case() {
    let mut style = StyleDeclaration::new();
    assert!(style.set_property("  zIndex ", " 10 "));
    assert_eq!(style.get_property_value("z-index"), Some("10"));

    // Kebab names are case sensitive on this surface
    assert!(!style.set_property("Z-INDEX", "1"));
}

#[test]
fn test_style_parse_garbage() {
    let style = StyleDeclaration::parse(";;: ; color ; opacity: ;display:block");
    assert_eq!(style.css_text(), "display: block;");
}

// ============================================================================
// EVENT EDGE CASES
// ============================================================================

#[test]
fn test_non_bubbling_event_stays_on_target() {
    let doc = SharedDocument::default();
    let input = doc.create_element("input");
    doc.append_child(doc.body(), input).unwrap();

    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    doc.add_event_listener(doc.root(), "focus", Listener::new(move |_| h.set(h.get() + 1)));

    doc.dispatch_event(&Event::new("focus", input).non_bubbling());
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_event() {
    let doc = SharedDocument::default();
    let weak = doc.downgrade();
    let hits = Rc::new(Cell::new(0));

    let h = hits.clone();
    let late = Listener::new(move |_| h.set(h.get() + 1));
    doc.add_event_listener(
        doc.root(),
        "keydown",
        Listener::new(move |_| {
            if let Some(doc) = weak.upgrade() {
                doc.add_event_listener(doc.root(), "keydown", late.clone());
            }
        }),
    );

    let key = || Event::keydown(NodeId::ROOT, KeyboardEvent::new("a"));
    doc.dispatch_event(&key());
    assert_eq!(hits.get(), 0);
    doc.dispatch_event(&key());
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_current_target_follows_propagation() {
    let doc = SharedDocument::default();
    let button = doc.create_element("button");
    doc.append_child(doc.body(), button).unwrap();

    let seen = Rc::new(Cell::new(NodeId::NONE));
    let s = seen.clone();
    doc.add_event_listener(doc.body(), "click", Listener::new(move |e| s.set(e.current_target())));

    doc.dispatch_event(&Event::click(button));
    assert_eq!(seen.get(), doc.body());
}
