//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Shadow roots are emitted as declarative shadow DOM
//! (`<template shadowrootmode="open">`) as the first child of their host, so
//! the output can be reloaded without script.

use std::fmt::Write;

use crate::{DomTree, NodeId, NodeType};

/// "If current node is an area, base, basefont, bgsound, br, col, embed,
/// frame, hr, img, input, keygen, link, meta, param, source, track or wbr
/// element, then continue on to the next child node at this point."
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// "If the parent of current node is a style, script, xmp, iframe, noembed,
/// noframes, or plaintext element ... then append the value of current node's
/// data literally."
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Serialize `id` and its subtree. For a document or shadow root only the
/// children are emitted.
///
/// Text inside raw-text elements such as `<style>` is written literally, so
/// a rule containing `</style>` ends the element early when reparsed.
#[must_use]
pub fn to_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, false, &mut out);
    out
}

fn write_node(tree: &DomTree, id: NodeId, raw_text: bool, out: &mut String) {
    let Some(node) = tree.get(id) else { return };

    match &node.node_type {
        NodeType::Document | NodeType::ShadowRoot { .. } => {
            for &child in tree.children(id) {
                write_node(tree, child, false, out);
            }
        }
        NodeType::Element(element) => {
            let tag = element.tag_name.to_ascii_lowercase();
            out.push('<');
            out.push_str(&tag);
            for (name, value) in &element.attrs {
                let _ = write!(out, " {name}=\"{}\"", escape(value, true));
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }

            if let Some(shadow) = element.shadow_root {
                out.push_str("<template shadowrootmode=\"open\">");
                write_node(tree, shadow, false, out);
                out.push_str("</template>");
            }

            let raw = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for &child in tree.children(id) {
                write_node(tree, child, raw, out);
            }
            let _ = write!(out, "</{tag}>");
        }
        NodeType::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape(text, false));
            }
        }
    }
}

/// [§ 13.3 Escaping a string](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
fn escape(text: &str, attribute_mode: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            '"' if attribute_mode => escaped.push_str("&quot;"),
            '<' if !attribute_mode => escaped.push_str("&lt;"),
            '>' if !attribute_mode => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
