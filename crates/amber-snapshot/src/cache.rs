use std::collections::HashMap;

use amber_cssom::SheetId;

/// Addresses already assigned to adopted sheets.
///
/// One cache covers a top-level pass and every shadow root under it. Create
/// a new one per top-level pass; separate passes must not share it.
#[derive(Debug, Clone, Default)]
pub struct AdoptedSheetCache {
    addresses: HashMap<SheetId, String>,
}

impl AdoptedSheetCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The address assigned to `sheet`, if any.
    #[must_use]
    pub fn get(&self, sheet: SheetId) -> Option<&str> {
        self.addresses.get(&sheet).map(String::as_str)
    }

    /// Record the address of `sheet`.
    pub fn insert(&mut self, sheet: SheetId, address: String) {
        let _ = self.addresses.insert(sheet, address);
    }

    /// Number of sheets with an address.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether nothing was externalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
