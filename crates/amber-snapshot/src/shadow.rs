use log::{debug, trace};

use crate::{AdoptedSheetCache, Root, SerializePass};

impl SerializePass<'_> {
    /// Recurse into every shadow host of `live_root` whose clone counterpart
    /// also has a shadow root. Hosts missing one on either side are skipped.
    pub(crate) fn serialize_shadow_hosts(
        &mut self,
        live_root: Root,
        clone_root: Root,
        cache: &mut AdoptedSheetCache,
    ) {
        let live = self.live;
        let options = self.options;
        let id_attr = options.id_attribute.as_str();

        for host in live
            .tree
            .elements_with_attribute(live_root.node, &options.shadow_host_attribute)
        {
            let Some(host_id) = live.tree.attribute(host, id_attr) else {
                trace!("shadow host {host:?} has no {id_attr}");
                continue;
            };
            let Some(clone_host) = self
                .clone
                .tree
                .find_by_attribute(clone_root.node, id_attr, host_id)
            else {
                trace!("no clone counterpart for shadow host {host_id}");
                continue;
            };
            let (Some(live_shadow), Some(clone_shadow)) = (
                live.tree.shadow_root(host),
                self.clone.tree.shadow_root(clone_host),
            ) else {
                trace!("shadow host {host_id} has no shadow root on one side");
                continue;
            };

            debug!("serializing CSSOM of shadow host {host_id}");
            self.serialize_root(Root::shadow(live_shadow), Root::shadow(clone_shadow), cache);
        }
    }
}
