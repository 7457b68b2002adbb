//! A document is a DOM tree plus its style sheet registry.
//!
//! The live page and its structural clone are both [`Document`]s. Shadow
//! trees live inside the same document, so a position in either one is a
//! [`Root`]: the node of the document or shadow root, tagged with its kind.

use amber_cssom::{Rule, SheetId, StyleSheet, StyleSheets};
use amber_dom::{DomTree, ElementData, NodeId};

/// [§ 4.2.2 Document tree / shadow tree](https://dom.spec.whatwg.org/#concept-document-tree)
///
/// Which kind of root a walk is in. Decides where adopted sheet links go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// A full document, links go at the start of `<body>`.
    Document,
    /// A shadow root, links go at the start of the shadow root.
    ShadowRoot,
}

/// A document or shadow root within a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Root {
    /// The document or shadow root node.
    pub node: NodeId,
    /// Its kind.
    pub kind: RootKind,
}

impl Root {
    /// The document root.
    #[must_use]
    pub const fn document() -> Self {
        Self {
            node: NodeId::ROOT,
            kind: RootKind::Document,
        }
    }

    /// A shadow root node.
    #[must_use]
    pub const fn shadow(node: NodeId) -> Self {
        Self {
            node,
            kind: RootKind::ShadowRoot,
        }
    }
}

/// DOM tree and CSSOM of one page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The node tree, shadow trees included.
    pub tree: DomTree,
    /// Every sheet of every root in `tree`.
    pub sheets: StyleSheets,
}

impl Document {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let id = self.tree.create_element(element);
        self.tree.append_child(parent, id);
        id
    }

    /// Give `owner` an inline sheet with `rules`, listed in `root`'s
    /// `styleSheets`.
    pub fn attach_sheet<R: Into<Rule>>(
        &mut self,
        root: NodeId,
        owner: NodeId,
        rules: impl IntoIterator<Item = R>,
    ) -> SheetId {
        self.sheets.attach(root, StyleSheet::owned(owner, rules))
    }

    /// Construct a sheet for adoption. Adopt it with
    /// [`StyleSheets::adopt`].
    pub fn construct_sheet<R: Into<Rule>>(&mut self, rules: impl IntoIterator<Item = R>) -> SheetId {
        self.sheets.insert(StyleSheet::constructed(rules))
    }

    /// The rules of the sheet owned by `node`, if it has a readable one.
    #[must_use]
    pub fn rules_of(&self, node: NodeId) -> Option<&[Rule]> {
        self.sheets
            .sheet_of(node)
            .and_then(|id| self.sheets.get(id))
            .and_then(StyleSheet::css_rules)
    }
}
