//! Tests for DOM tree mutation and scoped queries.

use amber_dom::{DomTree, ElementData, NodeId};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(ElementData::new(tag))
}

fn alloc_with_id(tree: &mut DomTree, tag: &str, id: &str) -> NodeId {
    tree.create_element(ElementData::new(tag).with_attr("data-id", id))
}

// ========== remove_child ==========

#[test]
fn test_remove_child_single_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    assert_eq!(tree.children(parent).len(), 1);

    tree.remove_child(parent, child);

    assert_eq!(tree.children(parent).len(), 0);
    assert_eq!(tree.parent(child), None);
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, a);

    // b is now first child, c is second
    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    // a and c are siblings now
    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
}

#[test]
fn test_remove_child_last_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.next_sibling(b), None);
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let existing = alloc_element(&mut tree, "b");
    tree.append_child(parent, existing);

    let new_child = alloc_element(&mut tree, "a");
    tree.insert_before(parent, new_child, existing);

    // new_child should be first, existing second
    assert_eq!(tree.children(parent), &[new_child, existing]);
    assert_eq!(tree.parent(new_child), Some(parent));
    assert_eq!(tree.next_sibling(new_child), Some(existing));
    assert_eq!(tree.prev_sibling(new_child), None);
    assert_eq!(tree.prev_sibling(existing), Some(new_child));
}

#[test]
fn test_insert_before_middle() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, c);

    let b = alloc_element(&mut tree, "b");
    tree.insert_before(parent, b, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_insert_before_reparents_attached_node() {
    let mut tree = DomTree::new();
    let old_parent = alloc_element(&mut tree, "div");
    let new_parent = alloc_element(&mut tree, "section");
    tree.append_child(NodeId::ROOT, old_parent);
    tree.append_child(NodeId::ROOT, new_parent);

    let moving = alloc_element(&mut tree, "a");
    tree.append_child(old_parent, moving);
    let anchor = alloc_element(&mut tree, "b");
    tree.append_child(new_parent, anchor);

    tree.insert_before(new_parent, moving, anchor);

    assert!(tree.children(old_parent).is_empty());
    assert_eq!(tree.children(new_parent), &[moving, anchor]);
}

// ========== insert_after / prepend_child ==========

#[test]
fn test_insert_after_last_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "head");
    tree.append_child(NodeId::ROOT, parent);

    let only = alloc_element(&mut tree, "style");
    tree.append_child(parent, only);

    let after = alloc_element(&mut tree, "style");
    tree.insert_after(only, after);

    assert_eq!(tree.children(parent), &[only, after]);
    assert_eq!(tree.next_sibling(only), Some(after));
    assert_eq!(tree.prev_sibling(after), Some(only));

    // The anchor can now be removed and the new node keeps its position.
    tree.remove_child(parent, only);
    assert_eq!(tree.children(parent), &[after]);
    assert_eq!(tree.prev_sibling(after), None);
}

#[test]
fn test_insert_after_middle() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, c);

    let b = alloc_element(&mut tree, "b");
    tree.insert_after(a, b);

    assert_eq!(tree.children(parent), &[a, b, c]);
}

#[test]
fn test_insert_after_detached_reference_is_noop() {
    let mut tree = DomTree::new();
    let orphan = alloc_element(&mut tree, "a");
    let other = alloc_element(&mut tree, "b");

    tree.insert_after(orphan, other);

    assert_eq!(tree.parent(other), None);
}

#[test]
fn test_prepend_child() {
    let mut tree = DomTree::new();
    let body = alloc_element(&mut tree, "body");
    tree.append_child(NodeId::ROOT, body);

    let first = alloc_element(&mut tree, "link");
    tree.prepend_child(body, first);
    assert_eq!(tree.children(body), &[first]);

    let second = alloc_element(&mut tree, "link");
    tree.prepend_child(body, second);
    assert_eq!(tree.children(body), &[second, first]);
    assert_eq!(tree.next_sibling(second), Some(first));
}

// ========== queries ==========

#[test]
fn test_find_by_attribute_in_tree_order() {
    let mut tree = DomTree::new();
    let outer = alloc_with_id(&mut tree, "div", "1");
    let inner = alloc_with_id(&mut tree, "span", "2");
    let twin = alloc_with_id(&mut tree, "p", "2");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(NodeId::ROOT, twin);

    assert_eq!(tree.find_by_attribute(NodeId::ROOT, "data-id", "2"), Some(inner));
    assert_eq!(tree.find_by_attribute(outer, "data-id", "1"), None);
    assert_eq!(tree.find_by_attribute(NodeId::ROOT, "data-id", "3"), None);
}

#[test]
fn test_queries_do_not_cross_shadow_boundary() {
    let mut tree = DomTree::new();
    let host = alloc_with_id(&mut tree, "x-widget", "host");
    tree.append_child(NodeId::ROOT, host);
    let shadow = tree.attach_shadow(host).unwrap();
    let hidden = alloc_with_id(&mut tree, "style", "hidden");
    tree.append_child(shadow, hidden);

    assert_eq!(tree.find_by_attribute(NodeId::ROOT, "data-id", "hidden"), None);
    assert_eq!(tree.find_by_attribute(shadow, "data-id", "hidden"), Some(hidden));
    assert_eq!(tree.elements_with_attribute(NodeId::ROOT, "data-id"), vec![host]);
    assert!(tree.is_shadow_root(shadow));
    assert_eq!(tree.parent(shadow), None);
}

#[test]
fn test_attach_shadow_is_stable_and_element_only() {
    let mut tree = DomTree::new();
    let host = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, host);

    let first = tree.attach_shadow(host);
    let second = tree.attach_shadow(host);
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(tree.shadow_root(host), first);

    assert_eq!(tree.attach_shadow(NodeId::ROOT), None);
}

#[test]
fn test_set_text_content_replaces_children() {
    let mut tree = DomTree::new();
    let style = alloc_element(&mut tree, "style");
    tree.append_child(NodeId::ROOT, style);

    tree.set_text_content(style, ".a{}");
    tree.set_text_content(style, ".b{}");

    assert_eq!(tree.children(style).len(), 1);
    assert_eq!(tree.text_content(style), ".b{}");

    tree.set_text_content(style, "");
    assert!(tree.children(style).is_empty());
}

#[test]
fn test_body_lookup() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let head = alloc_element(&mut tree, "head");
    let body = alloc_element(&mut tree, "BODY");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, head);
    tree.append_child(html, body);

    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.body(), Some(body));
}
