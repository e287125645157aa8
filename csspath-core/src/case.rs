//! Identifier case handling
//!
//! Plain CSS keywords and property names are case-insensitive. Variables,
//! custom properties, placeholders and call expressions carry user-chosen
//! names and must round-trip exactly.

use std::borrow::Cow;

use crate::config::RULES;
use crate::cursor::Cursor;
use crate::node::NodeKind;

/// Lower-case `value` unless its case may be significant
pub fn normalize_case(value: &str) -> Cow<'_, str> {
    if preserves_case(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.to_lowercase())
    }
}

fn preserves_case(value: &str) -> bool {
    value.contains('$')
        || value.contains('@')
        || value.contains('#')
        || value.starts_with('%')
        || value.starts_with("--")
        || value.starts_with(":--")
        || (value.contains('(') && value.contains(')'))
}

/// `initial`, `inherit`, `unset` or `revert`, in any case
pub fn is_wide_keyword(value: &str) -> bool {
    RULES.is_wide_keyword(value)
}

/// `from` / `to` used as a selector inside a `@keyframes` block
pub fn is_keyframe_position_keyword(cursor: &Cursor<'_>, value: &str) -> bool {
    let Some(at_rule) = cursor.find_ancestor(&[NodeKind::AtRule]) else {
        return false;
    };
    at_rule
        .name()
        .is_some_and(|name| name.to_lowercase().ends_with("keyframes"))
        && RULES.is_keyframe_selector(value)
}
