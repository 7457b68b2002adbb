//! Externally addressable resources produced during serialization.
//!
//! A resource is a text blob plus the address a snapshot refers to it by.
//! The store is append-only: amber only ever adds to it and reads back.

use serde::Serialize;

/// Path prefix every serialized resource address lives under.
pub const SERIALIZED_PREFIX: &str = "/__serialized__/";

/// A single addressable blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Address the snapshot refers to this resource by.
    pub url: String,
    /// MIME type of `content`, e.g. `text/css`.
    pub mimetype: String,
    /// The resource body.
    pub content: String,
}

/// Build a resource for `text` with an address derived from `uid`.
///
/// The address is `/__serialized__/<uid>.<ext>` where the extension is the
/// MIME subtype (`text/css` becomes `.css`).
#[must_use]
pub fn resource_from_text(uid: &str, mimetype: &str, text: &str) -> Resource {
    let ext = mimetype
        .split_once('/')
        .map_or(mimetype, |(_, subtype)| subtype);
    let ext = ext.split(';').next().unwrap_or(ext).trim();
    Resource {
        url: format!("{SERIALIZED_PREFIX}{uid}.{ext}"),
        mimetype: mimetype.to_string(),
        content: text.to_string(),
    }
}

/// Append-only collection of resources, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Resources {
    entries: Vec<Resource>,
}

impl Resources {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource.
    pub fn add(&mut self, resource: Resource) {
        self.entries.push(resource);
    }

    /// Look up a resource by address.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Resource> {
        self.entries.iter().find(|r| r.url == url)
    }

    /// Iterate over resources in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.entries.iter()
    }

    /// Number of stored resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Resources {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
