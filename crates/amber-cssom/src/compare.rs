use crate::sheet::Rule;

/// Whether every rule of `a` has the same text as the rule at the same index
/// of `b`.
///
/// Only `a`'s length is walked. A `b` shorter than `a` never matches, but
/// extra trailing rules in `b` are not seen, so `[x]` matches `[x, y]`.
/// Callers rely on that exact skip behavior; do not make it symmetric
/// without checking them.
#[must_use]
pub fn style_sheets_match(a: &[Rule], b: &[Rule]) -> bool {
    a.iter()
        .enumerate()
        .all(|(i, rule)| b.get(i).is_some_and(|other| other.css_text() == rule.css_text()))
}
