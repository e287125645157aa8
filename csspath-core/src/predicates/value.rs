//! Value-grammar predicates
//!
//! Control keywords and operators reach the printer as generic words and
//! operators. These tests reclassify them from kind plus literal text.

use crate::config::RULES;
use crate::html_tags;
use crate::node::{Node, NodeRef};

pub fn is_paren_group(node: NodeRef<'_>) -> bool {
    matches!(node.node(), Node::ValueParenGroup { .. })
}

fn word_value<'a>(node: NodeRef<'a>) -> Option<&'a str> {
    match node.node() {
        Node::ValueWord { value, .. } => Some(value),
        _ => None,
    }
}

/// `from`, `through` or `end` in an `@for` header
pub fn is_control_for_keyword(node: NodeRef<'_>) -> bool {
    word_value(node).is_some_and(|w| RULES.is_for_keyword(w))
}

/// `and`, `or` or `not` in a condition
pub fn is_control_logical_keyword(node: NodeRef<'_>) -> bool {
    word_value(node).is_some_and(|w| RULES.is_logical_keyword(w))
}

/// `in` in an `@each` header
pub fn is_control_each_keyword(node: NodeRef<'_>) -> bool {
    word_value(node).is_some_and(|w| RULES.is_each_keyword(w))
}

pub fn is_arithmetic_operator(node: NodeRef<'_>) -> bool {
    match node.node() {
        Node::ValueOperator { value } => RULES.is_arithmetic_operator(value),
        _ => false,
    }
}

/// `==` / `!=`, which the value grammar reads as words
pub fn is_equality_operator(node: NodeRef<'_>) -> bool {
    word_value(node).is_some_and(|w| RULES.is_equality_operator(w))
}

/// `<`, `>`, `<=`, `>=`, which the value grammar reads as words
pub fn is_relational_operator(node: NodeRef<'_>) -> bool {
    word_value(node).is_some_and(|w| RULES.is_relational_operator(w))
}

pub fn is_url_function(node: NodeRef<'_>) -> bool {
    match node.node() {
        Node::ValueFunction { name, .. } => name.eq_ignore_ascii_case("url"),
        _ => false,
    }
}

pub fn is_known_markup_tag(value: &str) -> bool {
    html_tags::is_known_markup_tag(value)
}

/// `key: value`: a comma group whose second token is a colon
pub fn is_key_value_pair(node: NodeRef<'_>) -> bool {
    matches!(node.node(), Node::ValueCommaGroup { .. })
        && node.child(1).is_some_and(|sep| matches!(sep.node(), Node::ValueColon))
}

/// `(key: value, ...)`: a paren group opening with a key/value pair
pub fn is_key_value_container(node: NodeRef<'_>) -> bool {
    is_paren_group(node) && node.child(0).is_some_and(is_key_value_pair)
}

/// `$$` immediately followed by a word forms one `$$name` reference
pub fn is_interpolated_variable_shorthand(current: NodeRef<'_>, next: Option<NodeRef<'_>>) -> bool {
    let is_sigil = matches!(current.node(), Node::ValueFunction { name, .. } if name == "$$");
    is_sigil
        && next.is_some_and(|next| {
            matches!(next.node(), Node::ValueWord { before, .. } if before.is_empty())
        })
}
