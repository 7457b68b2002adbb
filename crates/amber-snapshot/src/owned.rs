//! Owned sheets: runtime rules of a single element become a static
//! `<style>` in the clone.

use amber_cssom::{Rule, StyleSheet, is_cssom, join_rules, style_sheets_match};
use amber_dom::{ElementData, NodeId};
use log::{debug, trace};

use crate::{Root, SerializePass};

impl SerializePass<'_> {
    /// Write every runtime-built sheet of `live_root` into `clone_root`.
    pub(crate) fn materialize_owned_sheets(&mut self, live_root: Root, clone_root: Root) {
        let live = self.live;
        for &sheet_id in live.sheets.style_sheets(live_root.node) {
            let Some(sheet) = live.sheets.get(sheet_id) else {
                continue;
            };
            if !is_cssom(sheet) {
                continue;
            }
            if let (Some(owner), Some(rules)) = (sheet.owner_node(), sheet.css_rules()) {
                self.materialize_sheet(owner, rules, clone_root);
            }
        }
    }

    fn materialize_sheet(&mut self, owner: NodeId, rules: &[Rule], clone_root: Root) {
        let live = self.live;
        let options = self.options;
        let id_attr = options.id_attribute.as_str();

        let Some(style_id) = live.tree.attribute(owner, id_attr).filter(|id| !id.is_empty()) else {
            let attributes = live
                .tree
                .as_element(owner)
                .map(|e| {
                    e.attrs
                        .iter()
                        .map(|(name, value)| format!("{name}: {value}"))
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .unwrap_or_default();
            let _ = self.warnings.add(format!(
                "stylesheet with attributes - [ {attributes} ] - was not serialized"
            ));
            return;
        };

        let clone = &mut *self.clone;
        let Some(clone_owner) = clone.tree.find_by_attribute(clone_root.node, id_attr, style_id)
        else {
            trace!("no clone counterpart for sheet owner {style_id}");
            return;
        };
        if clone.tree.parent(clone_owner).is_none() {
            trace!("clone counterpart {style_id} is detached");
            return;
        }

        if style_sheets_match(rules, clone.rules_of(clone_owner).unwrap_or(&[])) {
            trace!("sheet {style_id} already matches its clone");
            return;
        }

        let style = clone.tree.create_element(
            ElementData::new("style")
                .with_attr("type", "text/css")
                .with_attr(id_attr, style_id)
                .with_attr(&options.serialized_marker, "true"),
        );
        clone.tree.set_text_content(style, &join_rules(rules));

        // Insert first so the old node is still there to anchor on.
        clone.tree.insert_after(clone_owner, style);
        clone.tree.detach(clone_owner);
        let _ = clone.sheets.replace_owned(
            clone_root.node,
            clone_owner,
            StyleSheet::owned(style, rules.iter().cloned()),
        );

        debug!("serialized {} CSSOM rules for {style_id}", rules.len());
    }
}
