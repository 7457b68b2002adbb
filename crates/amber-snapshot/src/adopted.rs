//! Adopted sheets: shared constructed sheets become one external resource,
//! linked from every root that adopts them.
//!
//! See <https://github.com/WICG/construct-stylesheets/issues/93> for why
//! these cannot be inlined per root.

use amber_common::resource_from_text;
use amber_cssom::{StyleSheet, join_rules};
use amber_dom::{ElementData, NodeId};
use log::debug;

use crate::{AdoptedSheetCache, CSS_MIME_TYPE, Root, RootKind, SerializePass};

impl SerializePass<'_> {
    /// Link every adopted sheet of `live_root` from `clone_root`,
    /// externalizing sheets `cache` has not seen yet.
    pub(crate) fn extract_adopted_sheets(
        &mut self,
        live_root: Root,
        clone_root: Root,
        cache: &mut AdoptedSheetCache,
    ) {
        let live = self.live;
        for &sheet_id in live.sheets.adopted_style_sheets(live_root.node) {
            let href = if let Some(address) = cache.get(sheet_id) {
                address.to_string()
            } else {
                let text = live
                    .sheets
                    .get(sheet_id)
                    .and_then(StyleSheet::css_rules)
                    .map(join_rules)
                    .unwrap_or_default();
                let resource = resource_from_text(&self.uids.next_uid(), CSS_MIME_TYPE, &text);
                let address = resource.url.clone();
                self.resources.add(resource);
                cache.insert(sheet_id, address.clone());
                debug!("externalized adopted sheet {sheet_id:?} as {address}");
                address
            };

            let link = self.clone.tree.create_element(
                ElementData::new("link")
                    .with_attr("rel", "stylesheet")
                    .with_attr("href", &href),
            );
            let parent = self.link_parent(clone_root);
            self.clone.tree.prepend_child(parent, link);
        }
    }

    /// Documents take links at the start of `<body>`, shadow roots at their
    /// own start. A document without a body falls back to its document
    /// element, then to the document node.
    fn link_parent(&self, clone_root: Root) -> NodeId {
        match clone_root.kind {
            RootKind::Document => {
                let tree = &self.clone.tree;
                tree.body()
                    .or_else(|| tree.document_element())
                    .unwrap_or(clone_root.node)
            }
            RootKind::ShadowRoot => clone_root.node,
        }
    }
}
