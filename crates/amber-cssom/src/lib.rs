//! Style sheet object model for amber.
//!
//! # Scope
//!
//! This crate implements the slice of the
//! [CSS Object Model](https://www.w3.org/TR/cssom-1/) a snapshot needs:
//! - **Style sheets** ([§ 6.1 CSSStyleSheet](https://www.w3.org/TR/cssom-1/#the-cssstylesheet-interface))
//!   with their location, rule list and owner
//! - **Per-root collections** of owned and adopted sheets
//!   ([§ 6.2 document.styleSheets](https://www.w3.org/TR/cssom-1/#the-stylesheetlist-interface),
//!   [adoptedStyleSheets](https://drafts.csswg.org/cssom/#dom-documentorshadowroot-adoptedstylesheets))
//! - **Classification** of runtime-built sheets
//! - **Comparison** of rule lists by serialized text
//!
//! # Not Implemented
//!
//! - CSS parsing: a rule is only ever its serialized text
//! - Cascade and specificity
//! - Fetching sheets by `href`

/// Runtime sheet classification.
pub mod classify;
/// Rule list comparison.
pub mod compare;
/// Style sheets, rules and per-root sheet collections.
pub mod sheet;

pub use classify::is_cssom;
pub use compare::style_sheets_match;
pub use sheet::{Rule, SheetId, SheetOwner, StyleSheet, StyleSheets, join_rules};
