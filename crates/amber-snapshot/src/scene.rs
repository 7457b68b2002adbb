//! A scene is a JSON description of a live page and its structural clone.
//!
//! ```json
//! {
//!   "adopted_sheets": { "theme": [":host{color:red}"] },
//!   "live": {
//!     "adopted": ["theme"],
//!     "children": [
//!       { "tag": "style", "attrs": { "data-percy-element-id": "n1" },
//!         "sheet": { "rules": [".a{color:red}"] } }
//!     ]
//!   },
//!   "clone": { "children": [ { "tag": "style", "attrs": { "data-percy-element-id": "n1" } } ] }
//! }
//! ```
//!
//! Adopted sheets are declared once by name so several roots can share the
//! same sheet.

use std::collections::HashMap;

use amber_cssom::{Rule, SheetId, SheetOwner, StyleSheet};
use amber_dom::{AttributesMap, ElementData, NodeId, NodeType};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{Document, SerializeOptions};

/// Errors building documents from a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene is not valid JSON for this format.
    #[error("invalid scene: {0}")]
    Json(#[from] serde_json::Error),
    /// A node has neither a tag nor text.
    #[error("node at {path} has neither \"tag\" nor \"text\"")]
    EmptyNode {
        /// Child index path from the root, e.g. `0/2/1`.
        path: String,
    },
    /// A root adopts a sheet that is not declared in `adopted_sheets`.
    #[error("unknown adopted sheet \"{0}\"")]
    UnknownAdoptedSheet(String),
}

/// A parsed scene.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Attribute names, defaults when absent.
    #[serde(default)]
    pub options: SerializeOptions,
    /// Named constructed sheets.
    #[serde(default)]
    pub adopted_sheets: IndexMap<String, Vec<String>>,
    /// The live page.
    pub live: SceneRoot,
    /// Its structural clone.
    pub clone: SceneRoot,
}

/// A document or shadow root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneRoot {
    /// Names from [`Scene::adopted_sheets`], in adoption order.
    #[serde(default)]
    pub adopted: Vec<String>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// An element (`tag`) or text node (`text`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneNode {
    /// Element local name.
    pub tag: Option<String>,
    /// Text node data.
    pub text: Option<String>,
    /// Element attributes, in order.
    #[serde(default)]
    pub attrs: AttributesMap,
    /// The element's own sheet, if any.
    pub sheet: Option<SceneSheet>,
    /// Attached shadow root.
    pub shadow: Option<SceneRoot>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// An owned sheet. `rules: null` marks a sheet whose rules cannot be read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneSheet {
    /// Location the sheet was loaded from.
    pub href: Option<String>,
    /// Rule texts.
    pub rules: Option<Vec<String>>,
}

impl Scene {
    /// Parse a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if `json` does not describe a scene.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the live and clone documents.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyNode`] or [`SceneError::UnknownAdoptedSheet`]
    /// if either tree is malformed.
    pub fn build(&self) -> Result<(Document, Document), SceneError> {
        Ok((self.build_document(&self.live)?, self.build_document(&self.clone)?))
    }

    fn build_document(&self, root: &SceneRoot) -> Result<Document, SceneError> {
        let mut builder = Builder {
            doc: Document::new(),
            adopted: &self.adopted_sheets,
            constructed: HashMap::new(),
        };
        builder.root(NodeId::ROOT, root, "")?;
        Ok(builder.doc)
    }
}

struct Builder<'s> {
    doc: Document,
    adopted: &'s IndexMap<String, Vec<String>>,
    constructed: HashMap<&'s str, SheetId>,
}

impl<'s> Builder<'s> {
    fn root(&mut self, root: NodeId, scene: &SceneRoot, path: &str) -> Result<(), SceneError> {
        for name in &scene.adopted {
            let sheet = self.constructed_sheet(name)?;
            self.doc.sheets.adopt(root, sheet);
        }
        self.children(root, root, &scene.children, path)
    }

    fn constructed_sheet(&mut self, name: &str) -> Result<SheetId, SceneError> {
        let adopted: &'s IndexMap<String, Vec<String>> = self.adopted;
        let (key, rules) = adopted
            .get_key_value(name)
            .ok_or_else(|| SceneError::UnknownAdoptedSheet(name.to_string()))?;
        if let Some(&id) = self.constructed.get(key.as_str()) {
            return Ok(id);
        }
        let id = self.doc.construct_sheet(rules.iter().map(String::as_str));
        let _ = self.constructed.insert(key.as_str(), id);
        Ok(id)
    }

    fn children(
        &mut self,
        root: NodeId,
        parent: NodeId,
        nodes: &[SceneNode],
        path: &str,
    ) -> Result<(), SceneError> {
        for (index, node) in nodes.iter().enumerate() {
            let path = if path.is_empty() {
                index.to_string()
            } else {
                format!("{path}/{index}")
            };
            self.node(root, parent, node, &path)?;
        }
        Ok(())
    }

    fn node(
        &mut self,
        root: NodeId,
        parent: NodeId,
        node: &SceneNode,
        path: &str,
    ) -> Result<(), SceneError> {
        let Some(tag) = &node.tag else {
            let text = node
                .text
                .as_ref()
                .ok_or_else(|| SceneError::EmptyNode {
                    path: path.to_string(),
                })?;
            let id = self.doc.tree.alloc(NodeType::Text(text.clone()));
            self.doc.tree.append_child(parent, id);
            return Ok(());
        };

        let element = self.doc.append_element(
            parent,
            ElementData {
                tag_name: tag.clone(),
                attrs: node.attrs.clone(),
                shadow_root: None,
            },
        );
        if let Some(text) = &node.text {
            self.doc.tree.set_text_content(element, text);
        }

        if let Some(sheet) = &node.sheet {
            let rules = sheet
                .rules
                .as_ref()
                .map(|texts| texts.iter().map(|t| Rule::new(t.as_str())).collect());
            let _ = self.doc.sheets.attach(
                root,
                StyleSheet {
                    href: sheet.href.clone(),
                    rules,
                    owner: SheetOwner::Owned(element),
                },
            );
        }

        if let Some(shadow) = &node.shadow
            && let Some(shadow_root) = self.doc.tree.attach_shadow(element)
        {
            self.root(shadow_root, shadow, &format!("{path}/#shadow"))?;
        }

        self.children(root, element, &node.children, path)
    }
}
