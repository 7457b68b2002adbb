use crate::sheet::{SheetOwner, StyleSheet};

/// Whether `sheet` only exists in the CSSOM: it was not loaded from a
/// location, its rules are readable, and a single element owns it.
///
/// Those are the sheets a structural clone misses, since their rules were
/// inserted or edited through script rather than written into markup.
/// An empty but readable rule list still qualifies.
#[must_use]
pub fn is_cssom(sheet: &StyleSheet) -> bool {
    sheet.href.is_none()
        && sheet.css_rules().is_some()
        && matches!(sheet.owner, SheetOwner::Owned(_))
}
