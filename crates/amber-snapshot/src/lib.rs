//! CSSOM serialization for amber snapshots.
//!
//! # Scope
//!
//! A structural clone of a page only sees markup. Style rules inserted
//! through script, and constructed sheets shared through
//! `adoptedStyleSheets`, exist only in the CSSOM and are lost. This crate
//! walks the live [`Document`] and its clone side by side and writes that
//! state back into the clone:
//! - **Owned sheets** - runtime-built sheets of a single element are written
//!   out as a static `<style>` replacing the clone's element
//! - **Adopted sheets** - shared sheets are externalized once into a
//!   [`Resource`](amber_common::Resource) and linked from every root that
//!   adopts them
//! - **Shadow roots** - the same process runs for every shadow host, at
//!   any depth, sharing one [`AdoptedSheetCache`]
//!
//! Counterpart elements are matched through a stable identifier attribute
//! that both trees already carry (see [`SerializeOptions`]).
//!
//! # Not Implemented
//!
//! - Sheets loaded from an `href` (the clone already references them)
//! - CSS parsing or validation

mod adopted;
/// Adopted sheet deduplication.
pub mod cache;
/// Live and clone documents and their roots.
pub mod document;
/// Attribute names used to match and mark nodes.
pub mod options;
mod owned;
/// JSON scene descriptions of a live page and its clone.
pub mod scene;
mod shadow;

pub use cache::AdoptedSheetCache;
pub use document::{Document, Root, RootKind};
pub use options::SerializeOptions;
pub use scene::{Scene, SceneError};

use amber_common::{RandomUids, Resources, UidGenerator, Warnings};

/// MIME type of externalized adopted sheets.
pub const CSS_MIME_TYPE: &str = "text/css";

/// One serialization pass over a live document and its clone.
///
/// The pass borrows the caller's sinks for its whole duration. The live
/// document is only read; the clone, `resources` and `warnings` are written.
pub struct SerializePass<'a> {
    live: &'a Document,
    clone: &'a mut Document,
    resources: &'a mut Resources,
    warnings: &'a mut Warnings,
    uids: &'a mut dyn UidGenerator,
    options: &'a SerializeOptions,
}

impl<'a> SerializePass<'a> {
    /// Set up a pass. Nothing is touched until [`run`](Self::run) or
    /// [`serialize_root`](Self::serialize_root) is called.
    pub fn new(
        live: &'a Document,
        clone: &'a mut Document,
        resources: &'a mut Resources,
        warnings: &'a mut Warnings,
        uids: &'a mut dyn UidGenerator,
        options: &'a SerializeOptions,
    ) -> Self {
        Self {
            live,
            clone,
            resources,
            warnings,
            uids,
            options,
        }
    }

    /// Serialize from the document roots down, with a fresh cache.
    pub fn run(&mut self) {
        let mut cache = AdoptedSheetCache::new();
        self.serialize_root(Root::document(), Root::document(), &mut cache);
    }

    /// Serialize one pair of corresponding roots and everything nested in
    /// their shadow hosts.
    ///
    /// `cache` must be the same for every root reached from one top-level
    /// call, so a shared sheet is externalized once.
    pub fn serialize_root(
        &mut self,
        live_root: Root,
        clone_root: Root,
        cache: &mut AdoptedSheetCache,
    ) {
        self.materialize_owned_sheets(live_root, clone_root);
        self.extract_adopted_sheets(live_root, clone_root, cache);
        self.serialize_shadow_hosts(live_root, clone_root, cache);
    }
}

/// Outputs in-memory CSSOM of `live` into `clone`, with default attribute
/// names and random resource addresses.
pub fn serialize_cssom(
    live: &Document,
    clone: &mut Document,
    resources: &mut Resources,
    warnings: &mut Warnings,
) {
    let options = SerializeOptions::default();
    let mut uids = RandomUids;
    SerializePass::new(live, clone, resources, warnings, &mut uids, &options).run();
}
