//! Tests for the warning sink, the resource store and uid generation.

use std::collections::HashSet;

use amber_common::{
    RandomUids, Resources, SequentialUids, UidGenerator, Warnings, resource_from_text,
};

#[test]
fn test_warnings_keep_first_insertion_order() {
    let mut warnings = Warnings::new();
    assert!(warnings.add("b"));
    assert!(warnings.add("a"));
    assert!(!warnings.add("b"));

    assert_eq!(warnings.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains("a"));
}

#[test]
fn test_resource_from_text_address() {
    let resource = resource_from_text("abc", "text/css", ".a{}");
    assert_eq!(resource.url, "/__serialized__/abc.css");
    assert_eq!(resource.mimetype, "text/css");
    assert_eq!(resource.content, ".a{}");
}

#[test]
fn test_resource_from_text_strips_parameters() {
    let resource = resource_from_text("x", "text/css; charset=utf-8", "");
    assert_eq!(resource.url, "/__serialized__/x.css");
}

#[test]
fn test_resources_lookup_by_url() {
    let mut resources = Resources::new();
    resources.add(resource_from_text("one", "text/css", "a"));
    resources.add(resource_from_text("two", "text/css", "b"));

    assert_eq!(resources.len(), 2);
    assert_eq!(
        resources.get("/__serialized__/two.css").map(|r| r.content.as_str()),
        Some("b")
    );
    assert!(resources.get("/__serialized__/three.css").is_none());
}

#[test]
fn test_sequential_uids() {
    let mut uids = SequentialUids::new("sheet-");
    assert_eq!(uids.next_uid(), "sheet-0");
    assert_eq!(uids.next_uid(), "sheet-1");
}

#[test]
fn test_random_uids_are_distinct() {
    let mut uids = RandomUids;
    let seen: HashSet<String> = (0..64).map(|_| uids.next_uid()).collect();
    assert_eq!(seen.len(), 64);
}

#[test]
fn test_closure_as_generator() {
    let mut n = 10;
    let mut uids = move || {
        n += 1;
        n.to_string()
    };
    assert_eq!(UidGenerator::next_uid(&mut uids), "11");
}
