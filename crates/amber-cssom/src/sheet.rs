//! [§ 6.1 CSSStyleSheet](https://www.w3.org/TR/cssom-1/#the-cssstylesheet-interface)
//!
//! Sheets are stored in an arena owned by [`StyleSheets`] and referred to by
//! [`SheetId`]. Two roots holding the same `SheetId` hold the same sheet,
//! which is how sharing by reference is expressed.

use std::collections::HashMap;

use amber_dom::NodeId;

/// [§ 6.4 CSSRule](https://www.w3.org/TR/cssom-1/#the-cssrule-interface)
///
/// Only the serialized form (`cssText`) is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    css_text: String,
}

impl Rule {
    /// Create a rule from its serialized text.
    #[must_use]
    pub fn new(css_text: impl Into<String>) -> Self {
        Self {
            css_text: css_text.into(),
        }
    }

    /// "The cssText attribute must return a serialization of the CSS rule."
    #[must_use]
    pub fn css_text(&self) -> &str {
        &self.css_text
    }
}

impl From<&str> for Rule {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Rule {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Newline-join the rule texts in order. This is the text a snapshot writes
/// for a sheet, inline or as an external resource.
#[must_use]
pub fn join_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(Rule::css_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Identity of a sheet within one [`StyleSheets`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub usize);

/// [§ 6.1 owner node](https://www.w3.org/TR/cssom-1/#concept-css-style-sheet-owner-node)
///
/// A sheet either belongs to exactly one element (`<style>`, `<link>`) or is
/// a constructed sheet shared through `adoptedStyleSheets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOwner {
    /// Hosted inline by a single element.
    Owned(NodeId),
    /// Constructed and shared by reference; no owner node.
    Adopted,
}

/// [§ 6.1 CSSStyleSheet](https://www.w3.org/TR/cssom-1/#the-cssstylesheet-interface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    /// "The location of a CSS style sheet", `None` for inline and
    /// constructed sheets.
    pub href: Option<String>,
    /// The rule list, `None` when it cannot be read (a cross-origin sheet
    /// throws on `cssRules` access).
    pub rules: Option<Vec<Rule>>,
    /// Owner node or adopted.
    pub owner: SheetOwner,
}

impl StyleSheet {
    /// An inline sheet owned by `node`.
    #[must_use]
    pub fn owned<R: Into<Rule>>(node: NodeId, rules: impl IntoIterator<Item = R>) -> Self {
        Self {
            href: None,
            rules: Some(rules.into_iter().map(Into::into).collect()),
            owner: SheetOwner::Owned(node),
        }
    }

    /// A sheet loaded from `href` and owned by `node` (a `<link>`).
    #[must_use]
    pub fn linked<R: Into<Rule>>(
        node: NodeId,
        href: &str,
        rules: impl IntoIterator<Item = R>,
    ) -> Self {
        Self {
            href: Some(href.to_string()),
            rules: Some(rules.into_iter().map(Into::into).collect()),
            owner: SheetOwner::Owned(node),
        }
    }

    /// A constructed sheet for `adoptedStyleSheets`.
    #[must_use]
    pub fn constructed<R: Into<Rule>>(rules: impl IntoIterator<Item = R>) -> Self {
        Self {
            href: None,
            rules: Some(rules.into_iter().map(Into::into).collect()),
            owner: SheetOwner::Adopted,
        }
    }

    /// "The cssRules attribute must follow these steps: If the origin-clean
    /// flag is unset, throw a SecurityError exception."
    #[must_use]
    pub fn css_rules(&self) -> Option<&[Rule]> {
        self.rules.as_deref()
    }

    /// The owner node, if this sheet has one.
    #[must_use]
    pub const fn owner_node(&self) -> Option<NodeId> {
        match self.owner {
            SheetOwner::Owned(node) => Some(node),
            SheetOwner::Adopted => None,
        }
    }
}

/// Sheet lists of one document or shadow root.
#[derive(Debug, Clone, Default)]
struct RootSheets {
    owned: Vec<SheetId>,
    adopted: Vec<SheetId>,
}

/// Arena of sheets plus the per-root `styleSheets` and `adoptedStyleSheets`
/// lists.
///
/// Roots are keyed by the [`NodeId`] of the document or shadow root node.
#[derive(Debug, Clone, Default)]
pub struct StyleSheets {
    sheets: Vec<StyleSheet>,
    roots: HashMap<NodeId, RootSheets>,
}

impl StyleSheets {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sheet without attaching it to any root.
    pub fn insert(&mut self, sheet: StyleSheet) -> SheetId {
        let id = SheetId(self.sheets.len());
        self.sheets.push(sheet);
        id
    }

    /// Look up a sheet.
    #[must_use]
    pub fn get(&self, id: SheetId) -> Option<&StyleSheet> {
        self.sheets.get(id.0)
    }

    /// Number of sheets in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the arena holds no sheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Store `sheet` and append it to `root`'s `styleSheets`.
    pub fn attach(&mut self, root: NodeId, sheet: StyleSheet) -> SheetId {
        let id = self.insert(sheet);
        self.roots.entry(root).or_default().owned.push(id);
        id
    }

    /// Append an existing sheet to `root`'s `adoptedStyleSheets`. The same
    /// sheet may be adopted by any number of roots, or twice by one.
    pub fn adopt(&mut self, root: NodeId, sheet: SheetId) {
        self.roots.entry(root).or_default().adopted.push(sheet);
    }

    /// [§ 6.2 styleSheets](https://www.w3.org/TR/cssom-1/#dom-documentorshadowroot-stylesheets)
    #[must_use]
    pub fn style_sheets(&self, root: NodeId) -> &[SheetId] {
        self.roots.get(&root).map_or(&[][..], |r| r.owned.as_slice())
    }

    /// [adoptedStyleSheets](https://drafts.csswg.org/cssom/#dom-documentorshadowroot-adoptedstylesheets)
    #[must_use]
    pub fn adopted_style_sheets(&self, root: NodeId) -> &[SheetId] {
        self.roots.get(&root).map_or(&[][..], |r| r.adopted.as_slice())
    }

    /// [§ 6.3 LinkStyle.sheet](https://www.w3.org/TR/cssom-1/#dom-linkstyle-sheet)
    ///
    /// The sheet whose owner node is `node`, if any.
    #[must_use]
    pub fn sheet_of(&self, node: NodeId) -> Option<SheetId> {
        self.sheets
            .iter()
            .rposition(|s| s.owner == SheetOwner::Owned(node))
            .map(SheetId)
    }

    /// Register `sheet` under `root`, taking over the list position of the
    /// sheet owned by `previous_owner` if there is one there, otherwise
    /// appending.
    pub fn replace_owned(
        &mut self,
        root: NodeId,
        previous_owner: NodeId,
        sheet: StyleSheet,
    ) -> SheetId {
        let old = self.sheet_of(previous_owner);
        let id = self.insert(sheet);
        let list = &mut self.roots.entry(root).or_default().owned;
        match old.and_then(|old| list.iter().position(|&s| s == old)) {
            Some(index) => list[index] = id,
            None => list.push(id),
        }
        id
    }
}
